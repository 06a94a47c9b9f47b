/// Arithmetic which panics on overflow in release builds too
pub(crate) trait StrictApi: Sized {
    fn strict_add_(self, rhs: Self) -> Self;
    fn strict_mul_(self, rhs: Self) -> Self;
}

impl StrictApi for usize {
    #[track_caller]
    fn strict_add_(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(v) => v,
            None => panic!("attempt to add with overflow"),
        }
    }

    #[track_caller]
    fn strict_mul_(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Some(v) => v,
            None => panic!("attempt to multiply with overflow"),
        }
    }
}
