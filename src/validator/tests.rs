use super::{
    functions::FunctionRegistry,
    validator::{validate, Validator},
};
use crate::{
    ast::types::VarType,
    errors::errors::{ErrorImpl, ErrorKind, LogicalError, StructureError},
    lexer::source::SourceFile,
    Position,
};

fn check(source: &str) -> Result<(), crate::errors::errors::Error> {
    validate(&SourceFile::new(source, Some("test.sjava".to_string())))
}

fn logical_error(source: &str) -> LogicalError {
    match check(source).unwrap_err().internal_error() {
        ErrorImpl::Logical(error) => error.clone(),
        other => panic!("expected a logical error, got {:?}", other),
    }
}

fn error_line(source: &str) -> usize {
    check(source).unwrap_err().get_position().0
}

#[test]
fn test_valid_program() {
    let source = "\
int x = 5;
// a comment
void f(int y) {

    if (y) {
        return;
    }
    return;
}
";
    assert!(check(source).is_ok());
}

#[test]
fn test_final_without_value() {
    assert_eq!(
        logical_error("final int x;"),
        LogicalError::FinalWithoutValue {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_assignment_to_undeclared() {
    assert_eq!(
        logical_error("x = 5;"),
        LogicalError::UndeclaredAssignmentTarget {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_malformed_declaration_is_structural() {
    let error = check("int 5x;").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Structure);
    assert_eq!(error.exit_code(), 1);
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_missing_return() {
    let source = "\
void f() {
    int x = 1;
}
";
    assert_eq!(logical_error(source), LogicalError::MissingReturn);
    assert_eq!(error_line(source), 3);
}

#[test]
fn test_return_in_the_middle_of_a_body() {
    let source = "\
void f() {
    return;
    int x = 1;
    return;
}
";
    assert!(check(source).is_ok());
}

#[test]
fn test_unclosed_method() {
    let source = "\
void f() {
    int x = 1;
";
    assert_eq!(logical_error(source), LogicalError::ScopeMismatch);
}

#[test]
fn test_unclosed_block_inside_method() {
    let source = "\
void f() {
    if (true) {
        return;
";
    assert_eq!(logical_error(source), LogicalError::ScopeMismatch);
}

#[test]
fn test_nested_method() {
    let source = "\
void f() {
    void g() {
        return;
    }
    return;
}
";
    assert_eq!(logical_error(source), LogicalError::NestedFunction);
    assert_eq!(error_line(source), 2);
}

#[test]
fn test_global_return_and_statements() {
    assert_eq!(logical_error("return;"), LogicalError::InvalidGlobalLine);
    assert_eq!(logical_error("if (true) {\n}"), LogicalError::InvalidGlobalLine);
    assert_eq!(logical_error("void f() {\nreturn;\n}\nf();"), LogicalError::InvalidGlobalLine);
}

#[test]
fn test_assignment_in_block_does_not_initialize_outer() {
    let source = "\
int x;
void f() {
    if (true) {
        x = 5;
        int y = x;
    }
    int z = x;
    return;
}
";
    assert_eq!(
        logical_error(source),
        LogicalError::UninitializedSource {
            name: "x".to_string()
        }
    );
    assert_eq!(error_line(source), 7);
}

#[test]
fn test_assignment_in_own_scope_initializes() {
    let source = "\
void f() {
    int x;
    x = 5;
    int y = x;
    return;
}
";
    assert!(check(source).is_ok());
}

#[test]
fn test_write_to_initialized_outer_variable() {
    let source = "\
int x = 1;
void f() {
    while (true) {
        x = 2;
    }
    int y = x;
    return;
}
";
    assert!(check(source).is_ok());
}

#[test]
fn test_global_assignment_initializes_global() {
    let source = "\
int x;
x = 3;
void f() {
    int y = x;
    return;
}
";
    assert!(check(source).is_ok());
}

#[test]
fn test_global_declared_after_method_is_visible() {
    let source = "\
void f() {
    int y = g;
    return;
}
int g = 4;
";
    assert!(check(source).is_ok());
}

#[test]
fn test_self_assignment_of_uninitialized() {
    assert_eq!(
        logical_error("int x;\nx = x;"),
        LogicalError::UninitializedSource {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_self_assignment_in_nested_block_reads_local_copy() {
    let source = "\
int x;
void f() {
    if (true) {
        x = x;
        int y = x;
    }
    int z = x;
    return;
}
";
    assert_eq!(
        logical_error(source),
        LogicalError::UninitializedSource {
            name: "x".to_string()
        }
    );
    assert_eq!(error_line(source), 7);
}

#[test]
fn test_rejected_assignment_in_nested_block() {
    let source = "\
double x;
void f() {
    while (true) {
        x = \"text\";
    }
    return;
}
";
    assert_eq!(
        logical_error(source),
        LogicalError::NonMatchingConstant {
            value: "\"text\"".to_string(),
            expected: VarType::Double,
        }
    );
}

#[test]
fn test_final_variables() {
    assert_eq!(
        logical_error("final int x = 5;\nx = 6;"),
        LogicalError::FinalAssignmentTarget {
            name: "x".to_string()
        }
    );

    let parameter = "\
void f(final int a) {
    a = 1;
    return;
}
";
    assert_eq!(
        logical_error(parameter),
        LogicalError::FinalAssignmentTarget {
            name: "a".to_string()
        }
    );
}

#[test]
fn test_type_widening() {
    assert!(check("int a = 1;\ndouble b = a;\nboolean c = b;").is_ok());
    assert!(check("double d = 5;\nboolean e = 1.5;").is_ok());

    assert_eq!(
        logical_error("double a = 1.5;\nint b = a;"),
        LogicalError::NonMatchingVariable {
            name: "a".to_string(),
            expected: VarType::Int,
            found: VarType::Double,
        }
    );
    assert_eq!(
        logical_error("int a;\na = \"text\";"),
        LogicalError::NonMatchingConstant {
            value: "\"text\"".to_string(),
            expected: VarType::Int,
        }
    );
    assert_eq!(
        logical_error("int a = true;"),
        LogicalError::NonMatchingConstant {
            value: "true".to_string(),
            expected: VarType::Int,
        }
    );
}

#[test]
fn test_declarations() {
    assert!(check("int a = 1, b, c = a;\nString s = \"hi\";\nchar ch = 'c';").is_ok());
    assert_eq!(
        logical_error("int a;\ndouble a;"),
        LogicalError::VariableAlreadyDeclared {
            name: "a".to_string()
        }
    );

    let shadowing = "\
int a = 1;
void f(double a) {
    if (a) {
        String a = \"inner\";
    }
    return;
}
";
    assert!(check(shadowing).is_ok());
}

#[test]
fn test_method_declarations() {
    let duplicate = "\
void f() {
    return;
}
void f(int a) {
    return;
}
";
    assert_eq!(
        logical_error(duplicate),
        LogicalError::FunctionAlreadyDeclared {
            name: "f".to_string()
        }
    );
    assert_eq!(error_line(duplicate), 4);

    let parameters = "\
void f(int a, double a) {
    return;
}
";
    assert_eq!(
        logical_error(parameters),
        LogicalError::DuplicateParameter {
            name: "a".to_string()
        }
    );

    let local = "\
void f(int a) {
    int a = 2;
    return;
}
";
    assert_eq!(
        logical_error(local),
        LogicalError::VariableAlreadyDeclared {
            name: "a".to_string()
        }
    );
}

#[test]
fn test_method_calls() {
    let header = "\
void target(int a, String b) {
    return;
}
";
    let call = |body: &str| format!("{}void f() {{\n{}\n    return;\n}}\n", header, body);

    assert!(check(&call("    target(1, \"x\");")).is_ok());
    assert!(check(&call("    int n = 3;\n    target(n, \"x\");")).is_ok());
    assert!(check(&format!("{}void later() {{\n    return;\n}}\n", call("    later();"))).is_ok());

    assert_eq!(
        logical_error(&call("    missing();")),
        LogicalError::UnknownFunction {
            name: "missing".to_string()
        }
    );
    assert_eq!(
        logical_error(&call("    target(1);")),
        LogicalError::ArgumentCountMismatch {
            name: "target".to_string(),
            expected: 2,
            received: 1,
        }
    );
    assert_eq!(
        logical_error(&call("    int n;\n    target(n, \"x\");")),
        LogicalError::UninitializedArgument {
            name: "n".to_string()
        }
    );
    assert_eq!(
        logical_error(&call("    target(\"x\", \"x\");")),
        LogicalError::ArgumentTypeMismatch {
            argument: "\"x\"".to_string(),
            expected: VarType::Int,
        }
    );
}

#[test]
fn test_conditions() {
    let wrap = |condition: &str| {
        format!(
            "void f(int i, String s) {{\n    boolean b;\n    if ({}) {{\n    }}\n    return;\n}}\n",
            condition
        )
    };

    assert!(check(&wrap("true || i && 2.5")).is_ok());
    assert_eq!(
        logical_error(&wrap("b")),
        LogicalError::UninitializedConditionVariable {
            name: "b".to_string()
        }
    );
    assert_eq!(
        logical_error(&wrap("true && s")),
        LogicalError::NonBooleanConditionVariable {
            name: "s".to_string(),
            found: VarType::String,
        }
    );
    assert_eq!(
        logical_error(&wrap("unknown")),
        LogicalError::NonBooleanConditionConstant {
            value: "unknown".to_string()
        }
    );
}

#[test]
fn test_block_bindings_are_dropped() {
    let source = "\
void f() {
    while (true) {
        int inner = 1;
    }
    inner = 2;
    return;
}
";
    assert_eq!(
        logical_error(source),
        LogicalError::UndeclaredAssignmentTarget {
            name: "inner".to_string()
        }
    );
}

#[test]
fn test_bad_line_inside_method_is_structural() {
    let source = "\
void f() {
    int x = 1
    return;
}
";
    let error = check(source).unwrap_err();
    assert_eq!(
        error.internal_error(),
        &ErrorImpl::Structure(StructureError::InvalidGlobalVariableDeclaration)
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_first_pass_collects_globals_and_signatures() {
    let source = SourceFile::new(
        "int a = 1;\nvoid f(int x, boolean y) {\n    return;\n}\nString s;",
        None,
    );
    let mut validator = Validator::new(&source);
    validator.first_pass().unwrap();

    assert_eq!(
        validator.functions.get_function("f"),
        Some(&[VarType::Int, VarType::Boolean][..])
    );
    let globals = validator.scopes.global().unwrap();
    assert!(globals.get("a").unwrap().is_initialized());
    assert!(!globals.get("s").unwrap().is_initialized());
}

#[test]
fn test_function_registry() {
    let mut registry = FunctionRegistry::new();
    assert!(registry.get_function("f").is_none());

    registry
        .declare_function("f".to_string(), vec![VarType::Char], Position::null())
        .unwrap();
    assert_eq!(registry.get_function("f"), Some(&[VarType::Char][..]));

    let error = registry
        .declare_function("f".to_string(), vec![], Position::null())
        .unwrap_err();
    assert_eq!(error.get_error_name(), "FunctionAlreadyDeclared");
    assert_eq!(registry.get_function("f"), Some(&[VarType::Char][..]));
}
