pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
    pub const ALT_CLOSE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
}
