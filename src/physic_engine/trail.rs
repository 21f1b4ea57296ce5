use std::collections::VecDeque;

/// Historique borné des dernières positions d'une entité.
///
/// Quand la capacité est atteinte, l'entrée la plus ancienne est évincée.
#[derive(Debug, Clone)]
pub struct Trail<T> {
    points: VecDeque<T>,
    capacity: usize,
}

impl<T> Trail<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: T) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Du plus ancien au plus récent.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.points.iter()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&T> {
        self.points.back()
    }
}
