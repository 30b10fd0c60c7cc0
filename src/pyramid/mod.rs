use crate::error::PyramidError;
use log::debug;

/// Rows of a pyramid, top row first. Vacant cells hold zero.
pub type Pyramid = Vec<Vec<i32>>;

/// Inputs at or above this length are rejected outright.
pub const MAX_INPUT_LEN: usize = i32::MAX as usize - 1;

/// Sorts `numbers` and lays them out as a centered triangle, smallest value at
/// the top, each row one value wider than the one above it.
///
/// ```text
/// [1, 3, 2, 4, 6, 5]  ->  0 0 1 0 0
///                          0 2 0 3 0
///                          4 0 5 0 6
/// ```
pub fn build_pyramid(numbers: &[i32]) -> Result<Pyramid, PyramidError> {
    if numbers.is_empty() {
        return Err(PyramidError::Empty);
    }
    if numbers.len() >= MAX_INPUT_LEN {
        return Err(PyramidError::TooLarge(numbers.len()));
    }
    let rows = row_count(numbers.len()).ok_or(PyramidError::NotTriangular(numbers.len()))?;
    let width = 2 * rows - 1;
    debug!(
        "Building pyramid of {} rows, {} wide, from {} numbers",
        rows,
        width,
        numbers.len()
    );

    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();

    let mut pyramid = vec![vec![0; width]; rows];
    let mut values = sorted.into_iter();
    for (level, row) in pyramid.iter_mut().enumerate() {
        let first = rows - 1 - level;
        for (slot, value) in values.by_ref().take(level + 1).enumerate() {
            row[first + 2 * slot] = value;
        }
    }

    Ok(pyramid)
}

/// Same as [`build_pyramid`] for inputs that may contain missing values.
pub fn build_pyramid_from(numbers: &[Option<i32>]) -> Result<Pyramid, PyramidError> {
    let numbers = numbers
        .iter()
        .enumerate()
        .map(|(index, value)| value.ok_or(PyramidError::NullEntry(index)))
        .collect::<Result<Vec<i32>, PyramidError>>()?;
    build_pyramid(&numbers)
}

/// Number of rows `n` such that `1 + 2 + ... + n == len`, if any.
fn row_count(len: usize) -> Option<usize> {
    let mut rows = 0usize;
    let mut total = 0usize;
    while total < len {
        rows += 1;
        total += rows;
    }
    (total == len).then_some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(1), Some(1));
        assert_eq!(row_count(3), Some(2));
        assert_eq!(row_count(6), Some(3));
        assert_eq!(row_count(10), Some(4));
        assert_eq!(row_count(2), None);
        assert_eq!(row_count(7), None);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(build_pyramid(&[5]).unwrap(), vec![vec![5]]);
    }

    #[test]
    fn test_three_rows() {
        let pyramid = build_pyramid(&[1, 3, 2, 9, 4, 5]).unwrap();
        assert_eq!(
            pyramid,
            vec![
                vec![0, 0, 1, 0, 0],
                vec![0, 2, 0, 3, 0],
                vec![4, 0, 5, 0, 9],
            ]
        );
    }

    #[test]
    fn test_four_rows_with_duplicates() {
        let pyramid = build_pyramid(&[7, 1, 1, 3, 5, 2, 10, 8, 4, 6]).unwrap();
        assert_eq!(
            pyramid,
            vec![
                vec![0, 0, 0, 1, 0, 0, 0],
                vec![0, 0, 1, 0, 2, 0, 0],
                vec![0, 3, 0, 4, 0, 5, 0],
                vec![6, 0, 7, 0, 8, 0, 10],
            ]
        );
    }

    #[test]
    fn test_input_is_not_modified() {
        let numbers = vec![3, 2, 1];
        build_pyramid(&numbers).unwrap();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(build_pyramid(&[]), Err(PyramidError::Empty));
        assert_eq!(
            build_pyramid(&[1, 2, 3, 4]),
            Err(PyramidError::NotTriangular(4))
        );
        assert_eq!(
            build_pyramid_from(&[Some(1), None, Some(3)]),
            Err(PyramidError::NullEntry(1))
        );
    }

    #[test]
    fn test_from_options() {
        assert_eq!(
            build_pyramid_from(&[Some(2), Some(1), Some(3)]).unwrap(),
            vec![vec![0, 1, 0], vec![2, 0, 3]]
        );
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(
            build_pyramid(&[0, -1, 4]).unwrap(),
            vec![vec![0, -1, 0], vec![0, 0, 4]]
        );
    }
}
