pub trait Mean {
	fn mean(&self) -> f64;
}

impl Mean for Vec<f64> {
	fn mean(&self) -> f64 {
		self.as_slice().mean()
	}
}

impl Mean for &[f64] {
	fn mean(&self) -> f64 {
		let len = self.len() as f64;
		let sum = self.iter().sum::<f64>();

		// Will be NaN if len is 0
		sum / len
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mean_of_values() {
		assert_eq!(vec![1.0, 2.0, 3.0, 4.0].mean(), 2.5);
		assert_eq!(vec![-5.0, 5.0].mean(), 0.0);
	}

	#[test]
	fn mean_of_nothing_is_nan() {
		assert!(Vec::<f64>::new().mean().is_nan());
	}
}
