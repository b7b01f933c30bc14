/// A sequence of values which is known to be sorted in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct Sorted<T>(pub T);

impl<T: AsRef<[f64]>> Sorted<T> {
	pub fn as_slice(&self) -> &[f64] {
		self.0.as_ref()
	}
}

pub trait Sort {
	fn sorted(&mut self) -> Sorted<&Self>
	where
		Self: Sized;
}

impl Sort for Vec<f64> {
	/// Sorts the values in place, ordering them with `f64::total_cmp`
	fn sorted(&mut self) -> Sorted<&Vec<f64>> {
		self.sort_unstable_by(f64::total_cmp);
		Sorted(self)
	}
}
