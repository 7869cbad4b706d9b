//! Singly linked list of owned nodes

use super::{Container, Deletable, Insertable, Searchable, StructureKind};
use crate::step::{cells_of, Cell, Marks, OpRun, Recorder, Value};

type Link = Option<Box<Node>>;

struct Node {
    value: Value,
    next: Link,
}

/// A chain of boxed nodes with its length tracked alongside
pub struct LinkedList {
    head: Link,
    size: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref()).map(|n| n.value)
    }

    pub fn values(&self) -> Vec<Value> {
        self.iter().collect()
    }

    fn cells(&self) -> Vec<Cell> {
        cells_of(&self.values())
    }

    /// O(1)
    pub fn insert_front(&mut self, value: Value) -> OpRun {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.size += 1;
        OpRun::single(
            self.cells(),
            Marks::one(0),
            format!("Inserted {} at beginning", value),
        )
    }

    /// O(n): walks to the tail
    pub fn insert_back(&mut self, value: Value) -> OpRun {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.size += 1;
        OpRun::single(
            self.cells(),
            Marks::one(self.size - 1),
            format!("Inserted {} at end", value),
        )
    }

    /// Unlink the first node holding `value`
    pub fn delete_by_value(&mut self, value: Value) -> OpRun {
        if self.head.is_none() {
            return OpRun::single(self.cells(), Marks::NONE, "List is empty");
        }

        let Some(position) = self.iter().position(|v| v == value) else {
            return OpRun::single(
                self.cells(),
                Marks::NONE,
                format!("{} not found in list", value),
            );
        };

        let mut cursor = &mut self.head;
        for _ in 0..position {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        if let Some(node) = cursor.take() {
            *cursor = node.next;
        }

        self.size -= 1;
        let message = if position == 0 {
            format!("Deleted {} from beginning", value)
        } else {
            format!("Deleted {} from position {}", value, position)
        };
        // Highlight the successor that moved into the gap, if any
        let marks = if position < self.size {
            Marks::one(position)
        } else {
            Marks::NONE
        };
        OpRun::single(self.cells(), marks, message)
    }

    /// Visit nodes from the head until `value` is found
    pub fn search_by_value(&self, value: Value) -> OpRun {
        let cells = self.cells();
        let mut rec = Recorder::new();
        for (position, current) in self.iter().enumerate() {
            rec.emit(
                cells.clone(),
                Marks::one(position),
                format!("Searching for {} at position {}", value, position),
            );
            if current == value {
                rec.emit(
                    cells,
                    Marks::one(position),
                    format!("Found {} at position {}", value, position),
                );
                return rec.finish();
            }
        }
        rec.emit(cells, Marks::NONE, format!("{} not found in list", value));
        rec.finish()
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    // Unlink iteratively so long chains don't recurse through Box drops
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Insertable for LinkedList {
    fn insert(&mut self, value: Value) -> OpRun {
        self.insert_back(value)
    }
}

impl Deletable for LinkedList {
    fn delete(&mut self, value: Option<Value>) -> OpRun {
        match value {
            Some(value) => self.delete_by_value(value),
            // The list has no positional delete; drop the head's value
            None => match self.head.as_ref().map(|n| n.value) {
                Some(head) => self.delete_by_value(head),
                None => OpRun::single(Vec::new(), Marks::NONE, "List is empty"),
            },
        }
    }
}

impl Searchable for LinkedList {
    fn search(&self, value: Value) -> OpRun {
        self.search_by_value(value)
    }
}

impl Container for LinkedList {
    fn kind(&self) -> StructureKind {
        StructureKind::LinkedList
    }

    fn to_array(&self) -> Vec<Cell> {
        self.cells()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn insertable(&mut self) -> Option<&mut dyn Insertable> {
        Some(self)
    }

    fn deletable(&mut self) -> Option<&mut dyn Deletable> {
        Some(self)
    }

    fn searchable(&self) -> Option<&dyn Searchable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(run: OpRun) -> Vec<String> {
        run.map(|s| s.message).collect()
    }

    #[test]
    fn front_and_back_inserts() {
        let mut list = LinkedList::new();
        list.insert_back(2).for_each(drop);
        let step = list.insert_front(1).next().unwrap();
        assert_eq!(step.message, "Inserted 1 at beginning");
        assert_eq!(step.marks, Marks::one(0));
        let step = list.insert_back(3).next().unwrap();
        assert_eq!(step.message, "Inserted 3 at end");
        assert_eq!(step.marks, Marks::one(2));
        assert_eq!(list.values(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn delete_outcomes_are_distinct() {
        let mut list = LinkedList::new();
        assert_eq!(messages(list.delete_by_value(1)), vec!["List is empty"]);

        for v in [1, 2, 3, 2] {
            list.insert_back(v).for_each(drop);
        }
        assert_eq!(messages(list.delete_by_value(1)), vec!["Deleted 1 from beginning"]);
        assert_eq!(messages(list.delete_by_value(3)), vec!["Deleted 3 from position 1"]);
        assert_eq!(list.values(), vec![2, 2]);
        assert_eq!(messages(list.delete_by_value(9)), vec!["9 not found in list"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn delete_first_match_only() {
        let mut list = LinkedList::new();
        for v in [4, 5, 5] {
            list.insert_back(v).for_each(drop);
        }
        let step = list.delete_by_value(5).next().unwrap();
        assert_eq!(step.marks, Marks::one(1));
        assert_eq!(list.values(), vec![4, 5]);
    }

    #[test]
    fn search_miss_visits_everything() {
        let mut list = LinkedList::new();
        for v in [1, 2] {
            list.insert_back(v).for_each(drop);
        }
        assert_eq!(
            messages(list.search_by_value(7)),
            vec![
                "Searching for 7 at position 0",
                "Searching for 7 at position 1",
                "7 not found in list",
            ]
        );
    }
}
