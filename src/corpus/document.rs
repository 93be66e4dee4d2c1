#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub const fn new(name: String, text: String) -> Self {
        Self { name, text }
    }
}
