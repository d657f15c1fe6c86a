/// Helper type re-exported by the nested module. Construction has no side
/// effects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MyTest;

impl MyTest {
    pub fn new() -> Self {
        MyTest
    }
}
