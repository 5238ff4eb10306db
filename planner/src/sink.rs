/// Receiver of the shareable team code, typically the address-bar fragment
///
/// The session writes after every successful change, once the team and its
/// tallies are up to date. Writes replace the previous value.
pub trait FragmentSink {
    /// Replace the stored fragment
    fn write_fragment(&mut self, fragment: &str);

    /// Called when no team is loaded anymore
    fn clear_fragment(&mut self) {
        self.write_fragment("");
    }
}

/// Keeps only the latest fragment
impl FragmentSink for String {
    fn write_fragment(&mut self, fragment: &str) {
        self.clear();
        self.push_str(fragment);
    }
}

/// Records every write, oldest first
impl FragmentSink for Vec<String> {
    fn write_fragment(&mut self, fragment: &str) {
        self.push(fragment.to_string());
    }
}
