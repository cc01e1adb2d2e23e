use crate::core::models::Vec2;

/// A rectangular grid with one corner fixed at 0,0. Rows are indexed by `i`, columns by `j`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BoundedGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(rows: usize, cols: usize, default: T) -> Self
    where
        T: Clone,
    {
        BoundedGrid {
            rows,
            cols,
            cells: vec![default; rows * cols],
        }
    }

    /// Builds a grid from ragged rows, right-padding short rows with `pad`.
    pub fn from_rows(rows: Vec<Vec<T>>, pad: T) -> Self
    where
        T: Clone,
    {
        let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for mut row in rows {
            row.resize(cols, pad.clone());
            cells.extend(row);
        }
        BoundedGrid {
            rows: height,
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && (pos.i as usize) < self.rows && (pos.j as usize) < self.cols
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let pos = Vec2 {
                i: (index / cols) as i32,
                j: (index % cols) as i32,
            };
            (pos, cell)
        })
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    fn offset(&self, pos: &Vec2) -> usize {
        pos.i as usize * self.cols + pos.j as usize
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}
