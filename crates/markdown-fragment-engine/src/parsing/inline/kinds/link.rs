pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
    /// Links always open in a new browsing context.
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener";
}
