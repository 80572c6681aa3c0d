pub mod lookup_keys {
    pub const KEY_PARTNAME: &str = "@partname";
}
