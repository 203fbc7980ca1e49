//! Mutators aware of form-control construction patterns
//!
//! All three rules defer pattern recognition to [`crate::forms`] so the three
//! syntactic encodings of a control construction are handled uniformly.

use crate::ast::Node;
use crate::cursor::{self, Cursor};
use crate::forms::{
    construction_arguments, construction_arguments_mut, is_control_creating_construction,
    is_forms_construction,
};
use crate::mutator::Mutator;

/// Drops or neutralizes the validators attached to a control construction
///
/// A bare validator argument is dropped (or replaced by `[]` when a third
/// argument must keep its position), and `validators`/`asyncValidators` keys
/// of an options object are removed one candidate at a time.
pub struct FormValidation;

impl Mutator for FormValidation {
    fn name(&self) -> &'static str {
        "FormValidation"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        if !is_forms_construction(cursor) {
            return Vec::new();
        }
        let node = cursor.node();
        let Some(args) = construction_arguments(node) else {
            return Vec::new();
        };

        let mut candidates = Vec::new();

        // Drop the third argument when it carries validators.
        if args.len() == 3 && !args[2].is_nullish_or_empty_array() {
            candidates.push(without_last_argument(node));
        }

        // Drop a bare second argument (a validator, not an options object)
        // when it is the last one.
        if args.len() == 2
            && !args[1].is_nullish_or_empty_array()
            && !args[1].is_object_expression()
        {
            candidates.push(without_last_argument(node));
        }

        // With three arguments the second must keep its position, so a bare
        // validator is replaced by an empty array instead of dropped.
        if args.len() == 3
            && !args[1].is_nullish_or_empty_array()
            && !args[1].is_object_expression()
        {
            let mut replacement = node.clone();
            if let Some(replacement_args) = construction_arguments_mut(&mut replacement) {
                replacement_args[1] = Node::array(vec![]);
            }
            candidates.push(replacement);
        }

        // An options object loses its validator keys one at a time.
        if let Some(Node::ObjectExpression { properties }) = args.get(1) {
            for (index, property) in properties.iter().enumerate() {
                if is_validator_property(property) {
                    let mut replacement = node.clone();
                    if let Some(replacement_args) = construction_arguments_mut(&mut replacement) {
                        if let Some(Node::ObjectExpression { properties }) =
                            replacement_args.get_mut(1)
                        {
                            properties.remove(index);
                        }
                    }
                    candidates.push(replacement);
                }
            }
        }

        candidates
    }
}

/// Perturbs the default value of a control construction
///
/// Targets the 0-th positional argument, or the `value` key when that
/// argument is a control-state object. Literal rules match the generic
/// string/number/boolean mutators.
pub struct FormDefaultValue;

impl Mutator for FormDefaultValue {
    fn name(&self) -> &'static str {
        "FormDefaultValue"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        if !is_control_creating_construction(cursor) {
            return Vec::new();
        }
        let mut replacement = cursor.node().clone();
        let changed = match construction_arguments_mut(&mut replacement)
            .and_then(|args| args.first_mut())
        {
            Some(Node::ObjectExpression { properties }) => properties
                .iter_mut()
                .find_map(|property| match property {
                    Node::ObjectProperty { key, value }
                        if key.identifier_name() == Some("value") =>
                    {
                        Some(mutate_default_literal(value))
                    }
                    _ => None,
                })
                .unwrap_or(false),
            Some(argument) => mutate_default_literal(argument),
            None => false,
        };
        if changed {
            vec![replacement]
        } else {
            Vec::new()
        }
    }
}

/// Renames a control's name everywhere in the file
///
/// Triggers on the program root. Names bound to a recognized construction —
/// as a variable, an object property, or a class field — are collected, and
/// per distinct name one candidate renames every textually identical
/// identifier in the whole file. Matching is textual only: two unrelated
/// identifiers sharing a name are renamed together.
pub struct FormControlName;

const NAME_SUFFIX: &str = "_mutated";

impl Mutator for FormControlName {
    fn name(&self) -> &'static str {
        "FormControlName"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        if !cursor.is_root() || !matches!(cursor.node(), Node::Program { .. }) {
            return Vec::new();
        }
        let program = cursor.node();
        control_names(program)
            .iter()
            .map(|name| {
                let mut candidate = program.clone();
                candidate.rename_identifiers(name, NAME_SUFFIX);
                candidate
            })
            .collect()
    }
}

/// Every distinct identifier used as a control's name, in source order.
fn control_names(program: &Node) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    cursor::walk(program, &mut |cursor| {
        if !is_forms_construction(cursor) {
            return;
        }
        let name = match (cursor.parent_node(), cursor.field()) {
            (Some(Node::VariableDeclarator { id, .. }), Some("init")) => id.identifier_name(),
            (Some(Node::ObjectProperty { key, .. }), Some("value")) => key.identifier_name(),
            (Some(Node::ClassProperty { key, .. }), Some("value")) => key.identifier_name(),
            _ => None,
        };
        if let Some(name) = name {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    });
    names
}

fn is_validator_property(property: &Node) -> bool {
    match property {
        Node::ObjectProperty { key, .. } => matches!(
            key.identifier_name(),
            Some("validators") | Some("asyncValidators")
        ),
        _ => false,
    }
}

fn mutate_default_literal(node: &mut Node) -> bool {
    match node {
        Node::StringLiteral { value } => {
            if value.is_empty() {
                *value = "mutated string".to_string();
            } else {
                value.clear();
            }
            true
        }
        Node::NumberLiteral { value } => {
            *value += 1.0;
            true
        }
        Node::BooleanLiteral { value } => {
            *value = !*value;
            true
        }
        _ => false,
    }
}

fn without_last_argument(node: &Node) -> Node {
    let mut replacement = node.clone();
    if let Some(args) = construction_arguments_mut(&mut replacement) {
        args.pop();
    }
    replacement
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Collect everything one mutator produces over a whole program.
    fn collect(mutator: &dyn Mutator, program: &Node) -> Vec<Node> {
        let mut candidates = Vec::new();
        cursor::walk(program, &mut |cursor| {
            candidates.extend(mutator.mutate(cursor));
        });
        candidates
    }

    fn program_with(expression: Node) -> Node {
        Node::program(vec![Node::expr_stmt(expression)])
    }

    #[test]
    fn test_bare_second_argument_is_dropped() {
        // new FormControl('', Validators.required) -> new FormControl('')
        let program = program_with(Node::constructor_call(
            "FormControl",
            vec![
                Node::string(""),
                Node::member(Node::ident("Validators"), "required"),
            ],
        ));
        let candidates = collect(&FormValidation, &program);
        assert_eq!(
            candidates,
            vec![Node::constructor_call("FormControl", vec![Node::string("")])]
        );
    }

    #[test]
    fn test_trivially_empty_second_argument_is_kept() {
        let program = program_with(Node::constructor_call(
            "FormControl",
            vec![Node::string(""), Node::array(vec![])],
        ));
        assert!(collect(&FormValidation, &program).is_empty());
    }

    #[test]
    fn test_three_arguments_drop_third_and_neutralize_second() {
        let program = program_with(Node::constructor_call(
            "FormControl",
            vec![
                Node::string(""),
                Node::member(Node::ident("Validators"), "required"),
                Node::ident("asyncValidator"),
            ],
        ));
        let candidates = collect(&FormValidation, &program);
        assert_eq!(candidates.len(), 2);
        // Third argument dropped.
        assert_eq!(
            candidates[0],
            Node::constructor_call(
                "FormControl",
                vec![
                    Node::string(""),
                    Node::member(Node::ident("Validators"), "required"),
                ],
            )
        );
        // Second argument replaced by [] so the third keeps its position.
        assert_eq!(
            candidates[1],
            Node::constructor_call(
                "FormControl",
                vec![
                    Node::string(""),
                    Node::array(vec![]),
                    Node::ident("asyncValidator"),
                ],
            )
        );
    }

    #[test]
    fn test_options_object_loses_validator_keys_one_at_a_time() {
        let options = Node::object(vec![
            Node::property("validators", Node::ident("v")),
            Node::property("nonNullable", Node::boolean(true)),
            Node::property("asyncValidators", Node::ident("av")),
        ]);
        let program = program_with(Node::constructor_call(
            "FormControl",
            vec![Node::string(""), options],
        ));
        let candidates = collect(&FormValidation, &program);
        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0],
            Node::constructor_call(
                "FormControl",
                vec![
                    Node::string(""),
                    Node::object(vec![
                        Node::property("nonNullable", Node::boolean(true)),
                        Node::property("asyncValidators", Node::ident("av")),
                    ]),
                ],
            )
        );
        assert_eq!(
            candidates[1],
            Node::constructor_call(
                "FormControl",
                vec![
                    Node::string(""),
                    Node::object(vec![
                        Node::property("validators", Node::ident("v")),
                        Node::property("nonNullable", Node::boolean(true)),
                    ]),
                ],
            )
        );
    }

    #[test]
    fn test_default_value_in_inline_builder_control_round_trips() {
        // fb.group({ name: [''] }) -> fb.group({ name: ['mutated string'] })
        let program = program_with(Node::method_call(
            Node::ident("fb"),
            "group",
            vec![Node::object(vec![Node::property(
                "name",
                Node::array(vec![Node::string("")]),
            )])],
        ));
        let candidates = collect(&FormDefaultValue, &program);
        assert_eq!(candidates, vec![Node::array(vec![Node::string("mutated string")])]);

        // Applying the rule to the output yields back the original array.
        let mutated_program = program_with(Node::method_call(
            Node::ident("fb"),
            "group",
            vec![Node::object(vec![Node::property(
                "name",
                candidates.into_iter().next().unwrap(),
            )])],
        ));
        let round_trip = collect(&FormDefaultValue, &mutated_program);
        assert_eq!(round_trip, vec![Node::array(vec![Node::string("")])]);
    }

    #[test]
    fn test_default_value_in_control_state_object() {
        // new FormControl({ value: 1, disabled: true })
        let program = program_with(Node::constructor_call(
            "FormControl",
            vec![Node::object(vec![
                Node::property("value", Node::number(1.0)),
                Node::property("disabled", Node::boolean(true)),
            ])],
        ));
        let candidates = collect(&FormDefaultValue, &program);
        assert_eq!(
            candidates,
            vec![Node::constructor_call(
                "FormControl",
                vec![Node::object(vec![
                    Node::property("value", Node::number(2.0)),
                    Node::property("disabled", Node::boolean(true)),
                ])],
            )]
        );
    }

    #[test]
    fn test_default_value_ignores_group_constructions() {
        let program = program_with(Node::method_call(
            Node::ident("fb"),
            "group",
            vec![Node::object(vec![])],
        ));
        assert!(collect(&FormDefaultValue, &program).is_empty());
    }

    #[test]
    fn test_control_name_renamed_everywhere() {
        // const name = new FormControl(''); use(name);
        let program = Node::program(vec![
            Node::var_decl(
                "name",
                Node::constructor_call("FormControl", vec![Node::string("")]),
            ),
            Node::expr_stmt(Node::call(Node::ident("use"), vec![Node::ident("name")])),
        ]);
        let candidates = collect(&FormControlName, &program);
        assert_eq!(
            candidates,
            vec![Node::program(vec![
                Node::var_decl(
                    "name_mutated",
                    Node::constructor_call("FormControl", vec![Node::string("")]),
                ),
                Node::expr_stmt(Node::call(
                    Node::ident("use"),
                    vec![Node::ident("name_mutated")],
                )),
            ])]
        );
    }

    #[test]
    fn test_one_candidate_per_distinct_name() {
        let program = Node::program(vec![Node::expr_stmt(Node::method_call(
            Node::ident("fb"),
            "group",
            vec![Node::object(vec![
                Node::property("street", Node::array(vec![Node::string("")])),
                Node::property("city", Node::array(vec![Node::string("")])),
            ])],
        ))]);
        let candidates = collect(&FormControlName, &program);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_class_field_control_name() {
        let program = Node::program(vec![Node::ClassDeclaration {
            name: "LoginComponent".to_string(),
            body: vec![Node::ClassProperty {
                key: Box::new(Node::ident("email")),
                value: Some(Box::new(Node::constructor_call(
                    "FormControl",
                    vec![Node::string("")],
                ))),
            }],
        }]);
        let candidates = collect(&FormControlName, &program);
        assert_eq!(candidates.len(), 1);
        let Node::Program { body } = &candidates[0] else {
            panic!("candidate is not a program");
        };
        let Node::ClassDeclaration { body, .. } = &body[0] else {
            panic!("candidate lost its class");
        };
        let Node::ClassProperty { key, .. } = &body[0] else {
            panic!("candidate lost its field");
        };
        assert_eq!(key.identifier_name(), Some("email_mutated"));
    }
}
