#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, file: TestFile) -> Self {
        Self { name, file }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    /// Benchmark id parameter naming both the case and its fixture.
    pub fn id(&self) -> String {
        format!("{}/{}", self.name, self.file.file_name())
    }
}

/// A header section fixture, one `Name: value` per line.
#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// The fixture's header fields as name/value pairs, skipping lines without a colon.
    pub fn header_lines(&self) -> Vec<(&'static str, &'static str)> {
        self.content()
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim(), value.trim()))
            .collect()
    }

    /// Total bytes of names and values, used as benchmark throughput.
    pub fn field_bytes(&self) -> u64 {
        self.header_lines().iter().map(|(name, value)| (name.len() + value.len()) as u64).sum()
    }
}
