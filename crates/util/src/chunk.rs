//! Fixed-size chunking of slices.

use crate::UtilError;

/// Splits `items` into consecutive chunks of `size` elements.
///
/// The final chunk holds the remainder and may be shorter. An empty slice
/// yields no chunks.
///
/// # Examples
///
/// ```
/// use kitbag_util::chunk;
///
/// let chunks = chunk(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 3).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, UtilError> {
    if size == 0 {
        return Err(UtilError::InvalidChunkSize);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        assert_eq!(chunk::<u8>(&[], 4).unwrap(), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn size_larger_than_input_yields_one_chunk() {
        assert_eq!(chunk(&["a", "b"], 10).unwrap(), vec![vec!["a", "b"]]);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(chunk(&[1], 0), Err(UtilError::InvalidChunkSize));
    }
}
