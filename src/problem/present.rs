use tagcheck::{
    formatting::{render, render_token, Render},
    language::{TagSpec, TagToken},
    sequence::TagSequence,
};

/// Trait for types that can present themselves via a renderer
pub trait Present {
    /// Present this value using the given renderer
    fn present(&self, renderer: &dyn Render) -> String;
}

impl Present for TagToken {
    fn present(&self, renderer: &dyn Render) -> String {
        render_token(self, renderer)
    }
}

impl Present for TagSpec {
    fn present(&self, renderer: &dyn Render) -> String {
        render_token(&TagToken::opening(self.name), renderer)
    }
}

impl Present for TagSequence {
    fn present(&self, renderer: &dyn Render) -> String {
        render(renderer, self.tokens())
    }
}
