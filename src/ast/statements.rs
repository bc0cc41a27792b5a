use std::fmt::Display;

/// The six statement shapes a source line can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    MethodDeclaration,
    VariableDeclaration,
    IfOrWhile,
    FunctionCall,
    Assignment,
    Return,
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatementKind::MethodDeclaration => "method declaration",
            StatementKind::VariableDeclaration => "variable declaration",
            StatementKind::IfOrWhile => "if/while block",
            StatementKind::FunctionCall => "method call",
            StatementKind::Assignment => "assignment",
            StatementKind::Return => "return",
        };
        write!(f, "{}", name)
    }
}
