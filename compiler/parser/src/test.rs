// Copyright (C) 2021-2024 Loam Systems Inc.
// This file is part of the Loam library.

// The Loam library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Loam library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Loam library. If not, see <https://www.gnu.org/licenses/>.

use crate::{parse_docstring_pragma_arguments, parse_program, tokenize, ParserContext, ParserLimits};

use loam_ast::*;
use loam_errors::emitter::Handler;
use loam_errors::LoamError;
use loam_span::Position;

fn parse_expression_with_errors(source: &str) -> (Option<Expression>, Vec<LoamError>) {
    let (handler, buffer) = Handler::new_with_buf();
    let expression = crate::parse_expression(&handler, source);
    (expression, buffer.extract_errs().into_inner())
}

fn expression(source: &str) -> Expression {
    let (expression, errors) = parse_expression_with_errors(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    expression.unwrap_or_else(|| panic!("no expression parsed from {source:?}"))
}

fn expression_display(source: &str) -> String {
    expression(source).to_string()
}

fn parse_type_with_errors(source: &str) -> (Option<Type>, Vec<LoamError>) {
    let (handler, buffer) = Handler::new_with_buf();
    let type_ = crate::parse_type(&handler, source);
    (type_, buffer.extract_errs().into_inner())
}

fn type_(source: &str) -> Type {
    let (type_, errors) = parse_type_with_errors(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    type_.unwrap_or_else(|| panic!("no type parsed from {source:?}"))
}

fn type_display(source: &str) -> String {
    type_(source).to_string()
}

fn parse_statements_with_errors(source: &str) -> (Vec<Statement>, Vec<LoamError>) {
    let (handler, buffer) = Handler::new_with_buf();
    let statements = crate::parse_statements(&handler, source);
    (statements, buffer.extract_errs().into_inner())
}

fn statements(source: &str) -> Vec<Statement> {
    let (statements, errors) = parse_statements_with_errors(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    statements
}

fn parse_declarations_with_errors(source: &str) -> (Vec<Declaration>, Vec<LoamError>) {
    let (handler, buffer) = Handler::new_with_buf();
    let declarations = crate::parse_declarations(&handler, source);
    (declarations, buffer.extract_errs().into_inner())
}

fn declarations(source: &str) -> Vec<Declaration> {
    let (declarations, errors) = parse_declarations_with_errors(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    declarations
}

fn messages(errors: &[LoamError]) -> Vec<&str> {
    errors.iter().map(|error| error.message()).collect()
}

mod expressions {
    use super::*;

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let expression = expression("1+2*3");
        let Expression::Binary(outer) = &expression else {
            panic!("expected a binary expression, got {expression}");
        };
        assert_eq!(outer.op, BinaryOperation::Add);
        assert_eq!(outer.left.span().start, Position::new(0, 1, 0));
        let Expression::Binary(inner) = outer.right.as_ref() else {
            panic!("expected a nested binary expression");
        };
        assert_eq!(inner.op, BinaryOperation::Mul);
        assert_eq!(inner.left.span().start, Position::new(2, 1, 2));
        assert_eq!(inner.right.span().start, Position::new(4, 1, 4));
        assert_eq!(expression.to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn test_left_associative_operators() {
        assert_eq!(expression_display("a + b + c"), "((a + b) + c)");
        assert_eq!(expression_display("a - b - c"), "((a - b) - c)");
        assert_eq!(expression_display("a * b / c % d"), "(((a * b) / c) % d)");
    }

    #[test]
    fn test_right_associative_operators() {
        assert_eq!(expression_display("1 ?? 2 ?? 3"), "(1 ?? (2 ?? 3))");
        assert_eq!(expression_display("a || b || c"), "(a || (b || c))");
        assert_eq!(expression_display("a && b && c"), "(a && (b && c))");
    }

    #[test]
    fn test_precedence_tiers() {
        assert_eq!(
            expression_display("1 + 2 * 3 == 7 && true"),
            "(((1 + (2 * 3)) == 7) && true)"
        );
        assert_eq!(expression_display("a << b + c"), "(a << (b + c))");
        assert_eq!(expression_display("a | b ^ c & d"), "(a | (b ^ (c & d)))");
        assert_eq!(expression_display("a ?? b || c"), "((a ?? b) || c)");
    }

    #[test]
    fn test_conditional_is_right_associative() {
        assert_eq!(expression_display("a ? b : c ? d : e"), "(a ? b : (c ? d : e))");
    }

    #[test]
    fn test_access_expressions() {
        assert_eq!(expression_display("a.b.c"), "a.b.c");
        assert_eq!(expression_display("a?.b"), "a?.b");
        assert_eq!(expression_display("xs[0]"), "xs[0]");
        assert_eq!(expression_display("a.b[0].c"), "a.b[0].c");
        assert_eq!(expression_display("f(1, 2)"), "f(1, 2)");
        assert_eq!(expression_display("f(1)(2)"), "f(1)(2)");
    }

    #[test]
    fn test_optional_member_binds_like_access() {
        assert_eq!(expression_display("a?.b + c"), "(a?.b + c)");
    }

    #[test]
    fn test_argument_labels() {
        let expression = expression("f(to: 1, 2)");
        let Expression::Invocation(invocation) = expression else {
            panic!("expected an invocation");
        };
        assert_eq!(invocation.arguments.len(), 2);
        assert_eq!(invocation.arguments[0].label.as_ref().unwrap().name, "to");
        assert!(invocation.arguments[1].label.is_none());
        assert_eq!(invocation.to_string(), "f(to: 1, 2)");
    }

    #[test]
    fn test_unary_expressions() {
        assert_eq!(expression_display("-1"), "-1");
        assert_eq!(expression_display("!true"), "!true");
        assert_eq!(expression_display("<-x"), "<-x");
        assert_eq!(expression_display("-a + b"), "(-a + b)");
    }

    #[test]
    fn test_juxtaposed_unary_operators_are_reported() {
        let (expression, errors) = parse_expression_with_errors("--a");
        assert!(expression.is_some());
        assert_eq!(
            messages(&errors),
            vec!["unary operators must not be juxtaposed; parenthesize inner expression"]
        );
        // Parenthesizing silences the diagnostic.
        assert_eq!(expression_display("-(-a)"), "--a");
    }

    #[test]
    fn test_force_unwrap() {
        assert_eq!(expression_display("a!"), "a!");
        assert_eq!(expression_display("a!.b"), "a!.b");
        assert_eq!(expression_display("a! + b"), "(a! + b)");
    }

    #[test]
    fn test_casts() {
        assert_eq!(expression_display("x as Int"), "(x as Int)");
        assert_eq!(expression_display("x as? Int"), "(x as? Int)");
        assert_eq!(expression_display("x as! Int"), "(x as! Int)");
        assert_eq!(expression_display("x as @R"), "(x as @R)");
        assert_eq!(expression_display("x as Int ?? y"), "((x as Int) ?? y)");
    }

    #[test]
    fn test_reference_expression() {
        assert_eq!(expression_display("&x as &T"), "(&x as &T)");
        assert_eq!(expression_display("&x.y as auth &T"), "(&x.y as auth &T)");
    }

    #[test]
    fn test_bitwise_and_still_works() {
        assert_eq!(expression_display("a & b"), "(a & b)");
    }

    #[test]
    fn test_create_and_destroy() {
        assert_eq!(expression_display("create Counter(1)"), "create Counter(1)");
        assert_eq!(
            expression_display("create Token.Vault(balance: 0)"),
            "create Token.Vault(balance: 0)"
        );
        assert_eq!(expression_display("destroy x"), "destroy x");

        let (expression, errors) = parse_expression_with_errors("create Counter");
        assert!(expression.is_none());
        assert_eq!(messages(&errors), vec!["expected invocation expression, got <eof>"]);
    }

    #[test]
    fn test_path_expression() {
        assert_eq!(expression_display("/storage/vault"), "/storage/vault");
    }

    #[test]
    fn test_array_literal() {
        assert_eq!(expression_display("[1, 2, 3]"), "[1, 2, 3]");
        assert_eq!(expression_display("[]"), "[]");

        // A trailing comma is not permitted.
        let (_, errors) = parse_expression_with_errors("[1,]");
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_dictionary_literal() {
        assert_eq!(expression_display(r#"{"a": 1, "b": 2}"#), r#"{"a": 1, "b": 2}"#);
        assert_eq!(expression_display("{}"), "{}");
    }

    #[test]
    fn test_function_expression() {
        let expression = expression("fun (x: Int): Int { return x }");
        let Expression::Function(function) = expression else {
            panic!("expected a function expression");
        };
        assert_eq!(function.parameters.len(), 1);
        assert_eq!(function.parameters[0].name.name, "x");
        assert!(function.return_type.is_some());
        assert_eq!(function.body.block.statements.len(), 1);
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(expression_display(r#""hello""#), r#""hello""#);
    }

    #[test]
    fn test_fixed_point_literal() {
        let expression = expression("3.14");
        let Expression::Literal(Literal::FixedPoint(literal)) = &expression else {
            panic!("expected a fixed-point literal");
        };
        assert_eq!(literal.integer, "3");
        assert_eq!(literal.fractional, "14");
    }

    #[test]
    fn test_integer_literal_bases() {
        let integer = |source: &str| match expression(source) {
            Expression::Literal(Literal::Integer(literal)) => literal,
            other => panic!("expected an integer literal, got {other}"),
        };
        assert_eq!(integer("123").value, "123");
        assert_eq!(integer("123").base, 10);
        assert_eq!(integer("0b1010").value, "10");
        assert_eq!(integer("0b1010").base, 2);
        assert_eq!(integer("0o17").value, "15");
        assert_eq!(integer("0xFF").value, "255");
        assert_eq!(integer("1_000_000").value, "1000000");
    }

    #[test]
    fn test_integer_literal_missing_digits() {
        let (expression, errors) = parse_expression_with_errors("0b");
        let Some(Expression::Literal(Literal::Integer(literal))) = expression else {
            panic!("expected an integer literal");
        };
        assert_eq!(literal.base, 2);
        assert_eq!(literal.value, "0");
        assert_eq!(
            messages(&errors),
            vec![
                "missing digits",
                "invalid binary integer literal `0b`: missing digits",
            ]
        );
    }

    #[test]
    fn test_integer_literal_underscores() {
        let (_, errors) = parse_expression_with_errors("0b_101");
        assert_eq!(
            messages(&errors),
            vec!["invalid binary integer literal `0b_101`: leading underscore"]
        );

        let (_, errors) = parse_expression_with_errors("100_");
        assert_eq!(
            messages(&errors),
            vec!["invalid decimal integer literal `100_`: trailing underscore"]
        );
    }

    #[test]
    fn test_integer_literal_unknown_prefix() {
        let (_, errors) = parse_expression_with_errors("0z1");
        assert_eq!(messages(&errors), vec!["invalid integer literal `0z1`: unknown prefix"]);
    }

    #[test]
    fn test_argument_without_delimiter_is_reported() {
        let (expression, errors) = parse_expression_with_errors("f(1 2)");
        assert!(expression.is_some());
        assert_eq!(
            messages(&errors),
            vec!["unexpected argument in argument list (expecting delimiter or end of argument list), got decimal integer"]
        );
        assert_eq!(errors[0].span().start, Position::new(4, 1, 4));
    }

    #[test]
    fn test_expression_depth_limit() {
        let (handler, _buffer) = Handler::new_with_buf();
        let limits = ParserLimits {
            expression_depth: 4,
            type_depth: 4,
        };
        let mut context = ParserContext::with_limits(&handler, tokenize("((((((1))))))"), limits);
        let error = context.parse_expression().unwrap_err();
        assert_eq!(error.message(), "exceeded maximum expression depth of 4");
    }

    #[test]
    fn test_round_trips() {
        let sources = [
            "(1 + (2 * 3))",
            "a.b[0]!",
            "f(to: 1, 2)",
            "create Counter(1)",
            r#"{"k": 1}"#,
            "(a ? b : (c ? d : e))",
            "(&x as &T)",
            "(x as? Int)",
            "[/storage/a, /storage/b]",
            "<-r",
        ];
        for source in sources {
            let first = expression(source).to_string();
            let second = expression(&first).to_string();
            assert_eq!(first, second, "round trip failed for {source:?}");
        }
    }

    #[test]
    fn test_child_ranges_are_contained() {
        let expression = expression("foo(1 + 2, bar[3])");
        let span = expression.span();
        let Expression::Invocation(invocation) = &expression else {
            panic!("expected an invocation");
        };
        assert!(span.contains(&invocation.callee.span()));
        for argument in &invocation.arguments {
            assert!(span.contains(&argument.span));
        }
    }
}

mod type_arguments {
    use super::*;

    #[test]
    fn test_trailing_parenthesis_confirms_type_arguments() {
        let expression = expression("a < { K : V } > ( 1 )");
        let Expression::Invocation(invocation) = &expression else {
            panic!("expected an invocation, got {expression}");
        };
        assert_eq!(invocation.type_arguments.len(), 1);
        assert_eq!(invocation.type_arguments[0].to_string(), "{K: V}");
        assert_eq!(invocation.arguments.len(), 1);
        assert_eq!(invocation.arguments[0].to_string(), "1");
        assert_eq!(expression.to_string(), "a<{K: V}>(1)");
    }

    #[test]
    fn test_without_parenthesis_less_than_is_an_operator() {
        assert_eq!(expression_display("a < b > c"), "((a < b) > c)");
        assert_eq!(expression_display("a < b"), "(a < b)");
    }

    #[test]
    fn test_speculation_leaves_no_diagnostics_behind() {
        // The replayed type-argument attempt contributes nothing.
        let (expression, errors) = parse_expression_with_errors("a < b > c");
        assert!(expression.is_some());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_nested_speculation() {
        // The restricted-type lookahead runs inside the type-argument
        // lookahead.
        assert_eq!(expression_display("a<T{R}>(1)"), "a<T{R}>(1)");
    }

    #[test]
    fn test_multiple_type_arguments() {
        assert_eq!(expression_display("m<K, V>(k, v)"), "m<K, V>(k, v)");
        assert_eq!(expression_display("f<>(1)"), "f(1)");
    }

    #[test]
    fn test_speculation_inside_if_condition() {
        // `< b {` looks like a type-argument list whose entry ends in a
        // restriction list; both lookaheads must unwind cleanly.
        let statements = statements("if a < b { x = 1 }");
        let Statement::If(if_) = &statements[0] else {
            panic!("expected an if statement");
        };
        let IfTest::Expression(condition) = &if_.test else {
            panic!("expected a condition");
        };
        assert_eq!(condition.to_string(), "(a < b)");
        assert_eq!(if_.then.statements.len(), 1);
    }
}

mod types {
    use super::*;

    #[test]
    fn test_nominal_types() {
        assert_eq!(type_display("Int"), "Int");
        assert_eq!(type_display("Token.Vault"), "Token.Vault");
    }

    #[test]
    fn test_optional_types() {
        assert_eq!(type_display("Int?"), "Int?");
        assert!(matches!(type_("Int?"), Type::Optional(_)));
    }

    #[test]
    fn test_double_optional() {
        let type_ = type_("Int??");
        let Type::Optional(outer) = &type_ else {
            panic!("expected an optional type");
        };
        let Type::Optional(inner) = &outer.inner else {
            panic!("expected a nested optional type");
        };
        // The inner optional ends where the `??` token starts.
        assert_eq!(inner.span.end, Position::new(3, 1, 3));
        assert!(matches!(inner.inner, Type::Nominal(_)));
    }

    #[test]
    fn test_reference_types() {
        assert_eq!(type_display("&Vault"), "&Vault");
        assert_eq!(type_display("auth &Vault"), "auth &Vault");

        // The optional applies to the whole reference.
        let reference = type_("&Int?");
        assert!(matches!(reference, Type::Optional(_)));
        assert_eq!(reference.to_string(), "&Int?");
    }

    #[test]
    fn test_array_types() {
        assert_eq!(type_display("[Int]"), "[Int]");
        assert_eq!(type_display("[[Int]]"), "[[Int]]");
        assert_eq!(type_display("[Int; 3]"), "[Int; 3]");
    }

    #[test]
    fn test_constant_sized_type_requires_integer_size() {
        let (type_, errors) = parse_type_with_errors("[Int; x]");
        assert_eq!(type_.unwrap().to_string(), "[Int; _]");
        assert_eq!(
            messages(&errors),
            vec!["expected integer size for constant-sized type, got x"]
        );
    }

    #[test]
    fn test_dictionary_type() {
        let dictionary = type_("{Int: String}");
        assert!(matches!(dictionary, Type::Dictionary(_)));
        assert_eq!(dictionary.to_string(), "{Int: String}");
    }

    #[test]
    fn test_restricted_types() {
        let restricted = type_("{A, B}");
        let Type::Restricted(restricted) = &restricted else {
            panic!("expected a restricted type");
        };
        assert!(restricted.base.is_none());
        assert_eq!(restricted.restrictions.len(), 2);

        assert_eq!(type_display("{A}"), "{A}");
        assert_eq!(type_display("T{A, B}"), "T{A, B}");
    }

    #[test]
    fn test_mixed_brace_separators_are_reported() {
        let (_, errors) = parse_type_with_errors("{A, B: C}");
        assert_eq!(messages(&errors), vec!["unexpected colon in restricted type"]);

        let (_, errors) = parse_type_with_errors("{Int: String, B: C}");
        assert_eq!(messages(&errors), vec!["unexpected comma in dictionary type"]);
    }

    #[test]
    fn test_function_type() {
        assert_eq!(type_display("(Int, String): Bool"), "(Int, String): Bool");
        assert_eq!(type_display("(): Bool"), "(): Bool");
    }

    #[test]
    fn test_instantiation_type() {
        assert_eq!(type_display("Capability<&Vault>"), "Capability<&Vault>");
        assert_eq!(type_display("Map<K, V>"), "Map<K, V>");
    }

    #[test]
    fn test_type_depth_limit() {
        let (handler, _buffer) = Handler::new_with_buf();
        let limits = ParserLimits {
            expression_depth: 4,
            type_depth: 4,
        };
        let mut context = ParserContext::with_limits(&handler, tokenize("[[[[[Int]]]]]"), limits);
        let error = context.parse_type().unwrap_err();
        assert_eq!(error.message(), "exceeded maximum type depth of 4");
    }
}

mod statements {
    use super::*;

    #[test]
    fn test_force_unwrap_is_newline_sensitive() {
        let statements = statements("x\n!y");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].to_string(), "x");
        assert_eq!(statements[1].to_string(), "!y");

        let statements = super::statements("x!\ny");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].to_string(), "x!");
    }

    #[test]
    fn test_statements_on_one_line_need_a_semicolon() {
        let (statements, errors) = parse_statements_with_errors("x y");
        assert_eq!(statements.len(), 2);
        assert_eq!(
            messages(&errors),
            vec!["statements on the same line must be separated with a semicolon"]
        );

        let ok = super::statements("x; y");
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn test_return_value_must_start_on_the_same_line() {
        let statements = statements("return 1");
        let Statement::Return(return_) = &statements[0] else {
            panic!("expected a return statement");
        };
        assert!(return_.expression.is_some());

        let statements = super::statements("return\n1");
        assert_eq!(statements.len(), 2);
        let Statement::Return(return_) = &statements[0] else {
            panic!("expected a return statement");
        };
        assert!(return_.expression.is_none());
        assert_eq!(statements[1].to_string(), "1");
    }

    #[test]
    fn test_if_else_chains_fold_to_the_right() {
        let statements = statements("if a { } else if b { } else { }");
        assert_eq!(statements.len(), 1);
        let Statement::If(outer) = &statements[0] else {
            panic!("expected an if statement");
        };
        assert!(matches!(outer.test, IfTest::Expression(_)));
        let Some(otherwise) = &outer.otherwise else {
            panic!("expected an else branch");
        };
        let Statement::If(nested) = otherwise.as_ref() else {
            panic!("expected a nested if");
        };
        assert!(matches!(nested.otherwise.as_deref(), Some(Statement::Block(_))));
    }

    #[test]
    fn test_if_let_binding() {
        let statements = statements("if let x <- create R() { destroy x }");
        let Statement::If(if_) = &statements[0] else {
            panic!("expected an if statement");
        };
        let IfTest::Binding(binding) = &if_.test else {
            panic!("expected a binding test");
        };
        assert!(binding.is_if_binding);
        assert!(binding.is_constant);
        assert_eq!(binding.name.name, "x");
        assert_eq!(binding.transfer.operation, TransferOperation::Move);
    }

    #[test]
    fn test_loops() {
        let statements = statements("while x { break }\nfor i in xs { continue }");
        assert!(matches!(statements[0], Statement::While(_)));
        let Statement::For(for_) = &statements[1] else {
            panic!("expected a for statement");
        };
        assert_eq!(for_.identifier.name, "i");
        assert!(matches!(for_.block.statements[0], Statement::Continue(_)));
    }

    #[test]
    fn test_emit() {
        let statements = statements("emit Transfer(amount: 1)");
        let Statement::Emit(emit) = &statements[0] else {
            panic!("expected an emit statement");
        };
        assert_eq!(emit.invocation.arguments.len(), 1);
    }

    #[test]
    fn test_assignments_and_swap() {
        let statements = statements("x = 1\nr <- create R()\nq <-! p\na <-> b");
        let transfer = |statement: &Statement| match statement {
            Statement::Assign(assign) => assign.transfer.operation,
            other => panic!("expected an assignment, got {other}"),
        };
        assert_eq!(transfer(&statements[0]), TransferOperation::Copy);
        assert_eq!(transfer(&statements[1]), TransferOperation::Move);
        assert_eq!(transfer(&statements[2]), TransferOperation::MoveForced);
        assert!(matches!(statements[3], Statement::Swap(_)));
    }

    #[test]
    fn test_newline_inside_block_comment_separates_statements() {
        let statements = statements("a /* first\n second */ b");
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_unterminated_block_comment_is_reported() {
        let (_, errors) = parse_statements_with_errors("a /* b");
        assert_eq!(messages(&errors), vec!["missing comment end"]);
    }

    #[test]
    fn test_variable_declaration_statement() {
        let statements = statements("let x: Int = 1");
        let Statement::Declaration(declaration) = &statements[0] else {
            panic!("expected a declaration statement");
        };
        assert!(matches!(declaration.as_ref(), Declaration::Variable(_)));
    }
}

mod declarations {
    use super::*;

    #[test]
    fn test_variable_declarations() {
        let declarations = declarations("let x: Int = 1\nvar y <- create R()");
        let Declaration::Variable(x) = &declarations[0] else {
            panic!("expected a variable declaration");
        };
        assert!(x.is_constant);
        assert_eq!(x.type_annotation.as_ref().unwrap().to_string(), "Int");
        let Declaration::Variable(y) = &declarations[1] else {
            panic!("expected a variable declaration");
        };
        assert!(!y.is_constant);
        assert_eq!(y.transfer.operation, TransferOperation::Move);
    }

    #[test]
    fn test_variable_declaration_with_second_transfer() {
        let declarations = declarations("let r2 <- create R() <- old");
        let Declaration::Variable(declaration) = &declarations[0] else {
            panic!("expected a variable declaration");
        };
        assert_eq!(declaration.transfer.operation, TransferOperation::Move);
        assert_eq!(
            declaration.second_transfer.as_ref().unwrap().operation,
            TransferOperation::Move
        );
        assert_eq!(declaration.second_value.as_ref().unwrap().to_string(), "old");
    }

    #[test]
    fn test_resource_annotation() {
        let declarations = declarations("let v: @Vault <- create Vault()");
        let Declaration::Variable(declaration) = &declarations[0] else {
            panic!("expected a variable declaration");
        };
        let annotation = declaration.type_annotation.as_ref().unwrap();
        assert!(annotation.is_resource);
        assert_eq!(annotation.to_string(), "@Vault");
    }

    #[test]
    fn test_function_declaration_with_conditions() {
        let source = r#"
            pub fun withdraw(amount: Int): @Vault {
                pre { amount > 0: "amount must be positive" }
                post { true }
                return <-create Vault()
            }
        "#;
        let declarations = declarations(source);
        let Declaration::Function(function) = &declarations[0] else {
            panic!("expected a function declaration");
        };
        assert_eq!(function.access, Access::Pub);
        assert_eq!(function.name.name, "withdraw");
        assert!(function.return_type.as_ref().unwrap().is_resource);
        let body = function.body.as_ref().unwrap();
        let pre = body.pre_conditions.as_ref().unwrap();
        assert_eq!(pre.len(), 1);
        assert!(pre[0].message.is_some());
        let post = body.post_conditions.as_ref().unwrap();
        assert_eq!(post.len(), 1);
        assert!(post[0].message.is_none());
        assert_eq!(body.block.statements.len(), 1);
    }

    #[test]
    fn test_composite_declaration() {
        let source = r#"
            pub resource Vault: Provider, Receiver {
                let balance: Int

                init(balance: Int) {
                    self.balance = balance
                }

                pub fun deposit(from: @Vault) {
                }

                destroy() {
                }
            }
        "#;
        let declarations = declarations(source);
        let Declaration::Composite(composite) = &declarations[0] else {
            panic!("expected a composite declaration");
        };
        assert_eq!(composite.kind, CompositeKind::Resource);
        assert_eq!(composite.access, Access::Pub);
        assert_eq!(composite.conformances.len(), 2);
        assert_eq!(composite.members.len(), 4);
        assert!(matches!(composite.members[0], MemberDeclaration::Field(_)));
        let MemberDeclaration::SpecialFunction(init) = &composite.members[1] else {
            panic!("expected an initializer");
        };
        assert_eq!(init.kind, SpecialFunctionKind::Init);
        assert_eq!(init.parameters.len(), 1);
        let MemberDeclaration::SpecialFunction(destroy) = &composite.members[3] else {
            panic!("expected a destructor");
        };
        assert_eq!(destroy.kind, SpecialFunctionKind::Destroy);
    }

    #[test]
    fn test_interface_declaration_allows_bodiless_functions() {
        let source = "resource interface Provider { fun withdraw(amount: Int): @Vault }";
        let declarations = declarations(source);
        let Declaration::Interface(interface) = &declarations[0] else {
            panic!("expected an interface declaration");
        };
        assert_eq!(interface.kind, CompositeKind::Resource);
        let MemberDeclaration::Function(function) = &interface.members[0] else {
            panic!("expected a function member");
        };
        assert!(function.body.is_none());
    }

    #[test]
    fn test_event_declaration() {
        let declarations = declarations("pub event Transfer(to: Address, amount: Int)");
        let Declaration::Event(event) = &declarations[0] else {
            panic!("expected an event declaration");
        };
        assert_eq!(event.parameters.len(), 2);
        assert_eq!(event.parameters[0].name.name, "to");
    }

    #[test]
    fn test_import_declarations() {
        let declarations =
            declarations("import 0x01\nimport Token\nimport A, B from \"registry\"\nimport C from 0x02");
        assert!(matches!(
            &declarations[0],
            Declaration::Import(ImportDeclaration {
                location: ImportLocation::Address(_),
                ..
            })
        ));
        let Declaration::Import(bare) = &declarations[1] else {
            panic!("expected an import");
        };
        assert!(bare.identifiers.is_empty());
        assert!(matches!(bare.location, ImportLocation::Identifier(_)));
        let Declaration::Import(listed) = &declarations[2] else {
            panic!("expected an import");
        };
        assert_eq!(listed.identifiers.len(), 2);
        assert!(matches!(listed.location, ImportLocation::Str(_)));
        let Declaration::Import(single) = &declarations[3] else {
            panic!("expected an import");
        };
        assert_eq!(single.identifiers.len(), 1);
        assert!(matches!(single.location, ImportLocation::Address(_)));
    }

    #[test]
    fn test_transaction_declaration() {
        let source = r#"
            transaction(amount: Int) {
                let vault: @Vault

                prepare(account: Account) {
                }

                pre { amount > 0 }

                execute {
                }

                post { true }
            }
        "#;
        let declarations = declarations(source);
        let Declaration::Transaction(transaction) = &declarations[0] else {
            panic!("expected a transaction declaration");
        };
        assert_eq!(transaction.parameters.len(), 1);
        assert_eq!(transaction.fields.len(), 1);
        assert_eq!(
            transaction.prepare.as_ref().unwrap().kind,
            SpecialFunctionKind::Prepare
        );
        assert!(transaction.pre_conditions.is_some());
        assert_eq!(
            transaction.execute.as_ref().unwrap().kind,
            SpecialFunctionKind::Execute
        );
        assert!(transaction.post_conditions.is_some());
    }

    #[test]
    fn test_access_modifiers() {
        let declarations = declarations(
            "priv let a = 1\npub(set) var b = 2\naccess(contract) fun f() { }\naccess(self) let c = 3",
        );
        let access = |declaration: &Declaration| match declaration {
            Declaration::Variable(variable) => variable.access,
            Declaration::Function(function) => function.access,
            other => panic!("unexpected declaration {other}"),
        };
        assert_eq!(access(&declarations[0]), Access::Priv);
        assert_eq!(access(&declarations[1]), Access::PubSettable);
        assert_eq!(access(&declarations[2]), Access::Contract);
        assert_eq!(access(&declarations[3]), Access::Self_);
    }
}

mod programs {
    use super::*;

    #[test]
    fn test_parse_program() {
        let (program, failure) = parse_program("let x = 1\nlet y = 2");
        assert!(failure.is_none());
        assert_eq!(program.unwrap().declarations.len(), 2);
    }

    #[test]
    fn test_parse_program_aggregates_diagnostics() {
        let (program, failure) = parse_program("let x");
        assert!(program.is_some());
        let failure = failure.unwrap();
        assert_eq!(failure.len(), 1);
        let rendered = failure.to_string();
        assert!(rendered.starts_with("Parsing failed:\n"), "got {rendered:?}");
    }

    #[test]
    fn test_ast_serialization_round_trip() {
        let expression = expression("f(to: 1 + 2)[0]!");
        let json = serde_json::to_string(&expression).unwrap();
        let deserialized: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(expression, deserialized);
    }

    #[test]
    fn test_docstring_pragma_arguments() {
        let docstring = "  pragma arguments --foo\nsomething else\n\tpragma   arguments  x y z \npragma argumentsnope\npragma arguments";
        assert_eq!(parse_docstring_pragma_arguments(docstring), vec!["--foo", "x y z"]);
        assert!(parse_docstring_pragma_arguments("no pragmas here").is_empty());
    }
}
