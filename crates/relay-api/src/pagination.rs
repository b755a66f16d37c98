use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
	pub page: Option<u32>,
	pub page_size: Option<u32>,
}

/// Compute the storage offset and page size for pagination params.
/// Page size is clamped to 1..=MAX_PAGE_SIZE and pages start at 1.
pub fn page_bounds(page: Option<u32>, page_size: Option<u32>) -> (usize, usize) {
	let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
	let page = page.unwrap_or(1).max(1);
	let start = (page as usize - 1).saturating_mul(page_size as usize);
	(start, page_size as usize)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_applied() {
		assert_eq!(page_bounds(None, None), (0, DEFAULT_PAGE_SIZE as usize));
	}

	#[test]
	fn test_page_size_clamped() {
		assert_eq!(page_bounds(Some(1), Some(0)), (0, 1));
		assert_eq!(
			page_bounds(Some(1), Some(10_000)),
			(0, MAX_PAGE_SIZE as usize)
		);
	}

	#[test]
	fn test_offset_from_page() {
		assert_eq!(page_bounds(Some(3), Some(10)), (20, 10));
		// Page 0 is treated as page 1
		assert_eq!(page_bounds(Some(0), Some(10)), (0, 10));
	}
}
