use crate::test_utils::{dump, dump_err, parse_notation};
use crate::{AstNode, Stmt};

#[test]
fn if_without_else() {
    let res = dump(
        "PROGRAM_START
           IF_CONDITIONAL LEFT_PAREN IDENTIFIER(a) EQUAL NUMBER(1) RIGHT_PAREN
           BLOCK_START DATA_OUTPUT LEFT_PAREN LITERAL_STRING(one) RIGHT_PAREN COMMAND_END BLOCK_END
         PROGRAM_END",
    );

    insta::assert_snapshot!(res, @r"
    Program()
      IfConditional()
        Expression()
          Operand(a)
          Operator(==)
          Operand(1)
        Block()
          Output()
            Expression()
              Operand(one)
    ");
}

#[test]
fn if_with_else() {
    let res = dump(
        "PROGRAM_START
           IF_CONDITIONAL LEFT_PAREN IDENTIFIER(a) GREATER_EQUAL NUMBER(0) RIGHT_PAREN
           BLOCK_START BLOCK_END
           ELSE_CONDITIONAL
           BLOCK_START IDENTIFIER(a) ASSIGN NUMBER(0) COMMAND_END BLOCK_END
         PROGRAM_END",
    );

    insta::assert_snapshot!(res, @r"
    Program()
      IfConditional()
        Expression()
          Operand(a)
          Operator(>=)
          Operand(0)
        Block()
        ElseConditional()
          Block()
            Assignment(a)
              Expression()
                Operand(0)
    ");
}

#[test]
fn child_count_depends_on_else() {
    let without = parse_notation(
        "PROGRAM_START IF_CONDITIONAL LEFT_PAREN NUMBER(1) RIGHT_PAREN BLOCK_START BLOCK_END PROGRAM_END",
    )
    .unwrap();
    let with = parse_notation(
        "PROGRAM_START IF_CONDITIONAL LEFT_PAREN NUMBER(1) RIGHT_PAREN BLOCK_START BLOCK_END
         ELSE_CONDITIONAL BLOCK_START BLOCK_END PROGRAM_END",
    )
    .unwrap();

    assert_eq!(without.statements[0].to_syntax().children.len(), 2);
    assert_eq!(with.statements[0].to_syntax().children.len(), 3);

    let Stmt::IfConditional(cond) = &with.statements[0] else {
        panic!("expected conditional");
    };
    assert!(cond.else_block.as_ref().is_some_and(|b| b.statements.is_empty()));
}

#[test]
fn else_without_if() {
    let res = dump_err("PROGRAM_START ELSE_CONDITIONAL BLOCK_START BLOCK_END PROGRAM_END");

    insta::assert_snapshot!(res, @"syntax error: unexpected token Token(ELSE_CONDITIONAL, else_conditional) at position 1 where a statement was expected");
}

#[test]
fn then_branch_must_be_block() {
    let res = dump_err(
        "PROGRAM_START IF_CONDITIONAL LEFT_PAREN NUMBER(1) RIGHT_PAREN
         IDENTIFIER(a) ASSIGN NUMBER(0) COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @"unexpected token Token(IDENTIFIER, a) at position 5, expected BLOCK_START");
}

#[test]
fn missing_right_paren() {
    let res = dump_err(
        "PROGRAM_START IF_CONDITIONAL LEFT_PAREN IDENTIFIER(a) BLOCK_START BLOCK_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @"unexpected token Token(BLOCK_START, {) at position 4, expected RIGHT_PAREN");
}

#[test]
fn missing_left_paren() {
    let res = dump_err("PROGRAM_START IF_CONDITIONAL IDENTIFIER(a) RIGHT_PAREN PROGRAM_END");

    insta::assert_snapshot!(res, @"unexpected token Token(IDENTIFIER, a) at position 2, expected LEFT_PAREN");
}
