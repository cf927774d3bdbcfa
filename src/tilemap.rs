/// A 2D grid of per-cell values stored in row-major order.
///
/// Map planes (region tags, shadow bits) use this. Unlike a world map, game
/// maps do not wrap, so coordinates outside the grid are rejected rather
/// than folded back in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap an existing row-major buffer.
    /// Returns `None` if the buffer length does not match `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self { width, height, data })
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            self.in_bounds(x, y),
            "({}, {}) outside {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    /// Bounds-checked read.
    pub fn try_get(&self, x: usize, y: usize) -> Option<&T> {
        if self.in_bounds(x, y) {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Iterate over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }

    /// Row-major view of the underlying buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut map = Tilemap::new_with(3, 2, 0u8);
        map.set(2, 1, 9);
        assert_eq!(map.as_slice()[5], 9);
        assert_eq!(*map.get(2, 1), 9);
    }

    #[test]
    fn test_no_wrapping() {
        let map: Tilemap<u8> = Tilemap::new(4, 4);
        assert!(map.try_get(3, 3).is_some());
        assert!(map.try_get(4, 0).is_none());
        assert!(map.try_get(0, 4).is_none());
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Tilemap::from_vec(2, 2, vec![1u8, 2, 3]).is_none());
        let map = Tilemap::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(*map.get(1, 1), 4);
    }

    #[test]
    fn test_iter_scan_order() {
        let map = Tilemap::from_vec(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
        let coords: Vec<_> = map.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
