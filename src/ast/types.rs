/// Type annotation node attached to a variable declaration. The name is the
/// lower-cased spelling of a built-in type keyword (`integer` or `real`).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
}
