use crate::test_utils::{dump, dump_err};

#[test]
fn single_variable() {
    let res = dump("PROGRAM_START TYPE(int) IDENTIFIER(a) COMMAND_END PROGRAM_END");

    insta::assert_snapshot!(res, @r"
    Program()
      VariableDefinition()
        Variable(a)
    ");
}

#[test]
fn three_variables_in_order() {
    let res = dump(
        "PROGRAM_START
           TYPE(int) IDENTIFIER(a) ARGUMENT_SEPARATOR IDENTIFIER(b) ARGUMENT_SEPARATOR IDENTIFIER(c) COMMAND_END
         PROGRAM_END",
    );

    insta::assert_snapshot!(res, @r"
    Program()
      VariableDefinition()
        Variable(a)
        Variable(b)
        Variable(c)
    ");
}

#[test]
fn trailing_separator() {
    let res = dump_err(
        "PROGRAM_START TYPE(int) IDENTIFIER(a) ARGUMENT_SEPARATOR COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @"unexpected token Token(COMMAND_END, ;) at position 4, expected IDENTIFIER");
}

#[test]
fn type_without_variables() {
    let res = dump_err("PROGRAM_START TYPE(int) COMMAND_END PROGRAM_END");

    insta::assert_snapshot!(res, @"unexpected token Token(COMMAND_END, ;) at position 2, expected IDENTIFIER");
}

#[test]
fn missing_separator_between_variables() {
    let res = dump_err("PROGRAM_START TYPE(int) IDENTIFIER(a) IDENTIFIER(b) COMMAND_END PROGRAM_END");

    insta::assert_snapshot!(res, @"unexpected token Token(IDENTIFIER, b) at position 3, expected COMMAND_END");
}

#[test]
fn assignment_of_literal() {
    let res = dump("PROGRAM_START IDENTIFIER(x) ASSIGN NUMBER(42) COMMAND_END PROGRAM_END");

    insta::assert_snapshot!(res, @r"
    Program()
      Assignment(x)
        Expression()
          Operand(42)
    ");
}

#[test]
fn assignment_of_binary_expression() {
    let res = dump(
        "PROGRAM_START IDENTIFIER(y) ASSIGN IDENTIFIER(x) SUM NUMBER(1) COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @r"
    Program()
      Assignment(y)
        Expression()
          Operand(x)
          Operator(+)
          Operand(1)
    ");
}

#[test]
fn assignment_missing_command_end() {
    let res = dump_err("PROGRAM_START IDENTIFIER(x) ASSIGN NUMBER(1) PROGRAM_END");

    insta::assert_snapshot!(res, @"unexpected token Token(PROGRAM_END, program_end) at position 4, expected COMMAND_END");
}

#[test]
fn assignment_missing_command_end_at_end_of_stream() {
    let res = dump_err("PROGRAM_START IDENTIFIER(x) ASSIGN NUMBER(1)");

    insta::assert_snapshot!(res, @"unexpected end of token stream at position 4, expected COMMAND_END");
}

#[test]
fn assignment_missing_assign() {
    let res = dump_err("PROGRAM_START IDENTIFIER(x) NUMBER(1) COMMAND_END PROGRAM_END");

    insta::assert_snapshot!(res, @"unexpected token Token(NUMBER, 1) at position 2, expected ASSIGN");
}
