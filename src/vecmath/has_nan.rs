pub trait HasNan {
    fn has_nan(&self) -> bool;
}
