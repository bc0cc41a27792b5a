//! Unit tests for the parser module.
//!
//! This module contains tests for line classification including:
//! - Each of the six statement kinds
//! - The identifier and literal shapes the grammar accepts
//! - The dedicated global declaration errors
//! - Literal type inference and type compatibility

use super::classifier::{classify, literal_type, match_types};
use crate::{
    ast::{statements::StatementKind, types::VarType},
    errors::errors::{ErrorImpl, ErrorKind, StructureError},
};

fn structure_error(line: &str) -> StructureError {
    match classify(line).unwrap_err().internal_error() {
        ErrorImpl::Structure(error) => error.clone(),
        other => panic!("expected a structure error for {:?}, got {:?}", line, other),
    }
}

#[test]
fn test_classify_method_declarations() {
    for line in [
        "void f(){",
        "void foo(int a) {",
        "  void foo ( final int a , String b, char c,double d, boolean e )  {  ",
    ] {
        assert_eq!(classify(line).unwrap(), StatementKind::MethodDeclaration, "{}", line);
    }
}

#[test]
fn test_classify_invalid_method_declaration() {
    for line in [
        "void f()",
        "void f(int) {",
        "void f(int a,) {",
        "void _f() {",
        "void f(intx) {",
        "void f() { return; }",
    ] {
        assert_eq!(
            structure_error(line),
            StructureError::InvalidGlobalFunctionDeclaration,
            "{}",
            line
        );
    }
}

#[test]
fn test_classify_variable_declarations() {
    for line in [
        "int x;",
        "int x=5;",
        "final int x = -5, y, z = x;",
        "double d = 5., e = .5, f = 5, g = +1.25;",
        "boolean b = true, c = 3, e = -0.5, f = b;",
        "char c = 'a';",
        "String s = \"hello, world; {}\";",
        "   String _s1 ;   ",
    ] {
        assert_eq!(classify(line).unwrap(), StatementKind::VariableDeclaration, "{}", line);
    }
}

#[test]
fn test_classify_invalid_variable_declaration() {
    for line in [
        "int 5x;",
        "int _ = 5;",
        "int x = 5.5;",
        "char c = 'ab';",
        "String s = 'a';",
        "double d = \"5\";",
        "int x",
        "final int x = 1,;",
    ] {
        assert_eq!(
            structure_error(line),
            StructureError::InvalidGlobalVariableDeclaration,
            "{}",
            line
        );
    }
}

#[test]
fn test_variable_prefix_needs_a_word_boundary() {
    assert_eq!(classify("integer = 5;").unwrap(), StatementKind::Assignment);
    assert_eq!(classify("Strings = \"a\";").unwrap(), StatementKind::Assignment);
    assert_eq!(classify("voider();").unwrap(), StatementKind::FunctionCall);
}

#[test]
fn test_classify_if_and_while() {
    for line in [
        "if(y){",
        "if (true) {",
        "while (a || b && c) {",
        "while(-1.5&&false||_x){",
    ] {
        assert_eq!(classify(line).unwrap(), StatementKind::IfOrWhile, "{}", line);
    }
}

#[test]
fn test_classify_invalid_conditions() {
    for line in ["if () {", "if (a ||) {", "if (!a) {", "if (a == b) {", "if (\"s\") {", "if (a)"] {
        assert_eq!(structure_error(line), StructureError::InvalidLine, "{}", line);
    }
}

#[test]
fn test_classify_function_calls() {
    for line in ["f();", "foo(1, x, \"s\", 'c', true, -2.5);", "  foo ( a ) ; "] {
        assert_eq!(classify(line).unwrap(), StatementKind::FunctionCall, "{}", line);
    }
}

#[test]
fn test_classify_invalid_function_calls() {
    for line in ["f(a,);", "f(a)", "_f();", "f(a b);"] {
        assert_eq!(structure_error(line), StructureError::InvalidLine, "{}", line);
    }
}

#[test]
fn test_classify_assignments() {
    for line in ["x = 5;", "x=y;", "a = 'c', b = \"s\", c = true, d = -.5;", "_x1 = _y2 ;"] {
        assert_eq!(classify(line).unwrap(), StatementKind::Assignment, "{}", line);
    }
}

#[test]
fn test_classify_invalid_assignments() {
    for line in ["x = 5", "_ = 5;", "x = y + 1;", "x = 5,;", "5 = x;"] {
        assert_eq!(structure_error(line), StructureError::InvalidLine, "{}", line);
    }
}

#[test]
fn test_classify_return() {
    assert_eq!(classify("return;").unwrap(), StatementKind::Return);
    assert_eq!(classify("  return ;  ").unwrap(), StatementKind::Return);
    assert_eq!(structure_error("return x;"), StructureError::InvalidLine);
    assert_eq!(structure_error("return"), StructureError::InvalidLine);
}

#[test]
fn test_classify_braces_and_junk() {
    for line in ["}", "{", "else {", "int[] a;", "x++;", "} else {"] {
        let error = classify(line).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Structure, "{}", line);
    }
}

#[test]
fn test_structure_errors_are_not_yet_positioned() {
    let error = classify("}").unwrap_err();
    assert!(error.get_position().is_null());
}

#[test]
fn test_literal_type() {
    assert_eq!(literal_type("5"), Some(VarType::Int));
    assert_eq!(literal_type("-5"), Some(VarType::Int));
    assert_eq!(literal_type("+5"), Some(VarType::Int));
    assert_eq!(literal_type("5.5"), Some(VarType::Double));
    assert_eq!(literal_type(".5"), Some(VarType::Double));
    assert_eq!(literal_type("5."), Some(VarType::Double));
    assert_eq!(literal_type("true"), Some(VarType::Boolean));
    assert_eq!(literal_type("false"), Some(VarType::Boolean));
    assert_eq!(literal_type("\"text\""), Some(VarType::String));
    assert_eq!(literal_type("\"\""), Some(VarType::String));
    assert_eq!(literal_type("'c'"), Some(VarType::Char));
    assert_eq!(literal_type("x"), None);
    assert_eq!(literal_type("'ab'"), None);
    assert_eq!(literal_type("."), None);
}

#[test]
fn test_match_types() {
    for ty in VarType::ALL {
        assert!(match_types(ty, ty));
    }

    assert!(match_types(VarType::Int, VarType::Double));
    assert!(match_types(VarType::Double, VarType::Boolean));
    assert!(match_types(VarType::Int, VarType::Boolean));

    assert!(!match_types(VarType::Double, VarType::Int));
    assert!(!match_types(VarType::Boolean, VarType::Double));
    assert!(!match_types(VarType::Boolean, VarType::Int));

    for ty in [VarType::Int, VarType::Double, VarType::Boolean] {
        for text in [VarType::Char, VarType::String] {
            assert!(!match_types(ty, text));
            assert!(!match_types(text, ty));
        }
    }
    assert!(!match_types(VarType::Char, VarType::String));
    assert!(!match_types(VarType::String, VarType::Char));
}

#[test]
fn test_var_type_round_trip_through_keyword() {
    assert_eq!("String".parse::<VarType>().unwrap(), VarType::String);
    assert!("string".parse::<VarType>().is_err());
}
