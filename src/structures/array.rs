//! Growable array with index access

use super::{Container, Deletable, Insertable, Searchable, StructureKind};
use crate::step::{cells_of, Cell, Marks, OpRun, Recorder, Value};

/// Probe `values` left to right, one step per index
pub(crate) fn linear_search(values: &[Value], target: Value) -> OpRun {
    let cells = cells_of(values);
    let mut rec = Recorder::new();
    for (index, &value) in values.iter().enumerate() {
        rec.emit(cells.clone(), Marks::one(index), format!("Checking index {}", index));
        if value == target {
            rec.emit(
                cells,
                Marks::one(index),
                format!("Found {} at index {}", target, index),
            );
            return rec.finish();
        }
    }
    rec.emit(cells, Marks::NONE, format!("{} not found", target));
    rec.finish()
}

pub struct ArrayList {
    items: Vec<Value>,
}

impl ArrayList {
    pub fn new() -> Self {
        ArrayList { items: Vec::new() }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn append(&mut self, value: Value) -> OpRun {
        self.items.push(value);
        OpRun::single(
            self.to_array(),
            Marks::one(self.items.len() - 1),
            format!("Appended {}", value),
        )
    }

    /// Pop the last element, or remove the first occurrence of `value`
    pub fn remove(&mut self, value: Option<Value>) -> OpRun {
        if self.items.is_empty() {
            return OpRun::single(Vec::new(), Marks::NONE, "Array is empty");
        }
        let Some(value) = value else {
            let removed = self.items.pop();
            let message = match removed {
                Some(removed) => format!("Popped {} from end", removed),
                None => "Array is empty".to_string(),
            };
            return OpRun::single(self.to_array(), Marks::NONE, message);
        };

        match self.items.iter().position(|&v| v == value) {
            Some(index) => {
                self.items.remove(index);
                let marks = if index < self.items.len() {
                    Marks::one(index)
                } else {
                    Marks::NONE
                };
                OpRun::single(
                    self.to_array(),
                    marks,
                    format!("Removed {} at index {}", value, index),
                )
            }
            None => OpRun::single(self.to_array(), Marks::NONE, format!("{} not found", value)),
        }
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl Insertable for ArrayList {
    fn insert(&mut self, value: Value) -> OpRun {
        self.append(value)
    }
}

impl Deletable for ArrayList {
    fn delete(&mut self, value: Option<Value>) -> OpRun {
        self.remove(value)
    }
}

impl Searchable for ArrayList {
    fn search(&self, value: Value) -> OpRun {
        linear_search(&self.items, value)
    }
}

impl Container for ArrayList {
    fn kind(&self) -> StructureKind {
        StructureKind::Array
    }

    fn to_array(&self) -> Vec<Cell> {
        cells_of(&self.items)
    }

    fn len(&self) -> usize {
        self.items.len()
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

    fn filled(values: &[Value]) -> ArrayList {
        let mut array = ArrayList::new();
        for &v in values {
            array.append(v).for_each(drop);
        }
        array
    }

    #[test]
    fn delete_without_value_pops_last() {
        let mut array = filled(&[1, 2, 3]);
        let step = array.remove(None).next().unwrap();
        assert_eq!(step.message, "Popped 3 from end");
        assert_eq!(array.items(), &[1, 2]);
    }

    #[test]
    fn delete_by_value_and_miss() {
        let mut array = filled(&[4, 6, 4]);
        let step = array.remove(Some(4)).next().unwrap();
        assert_eq!(step.message, "Removed 4 at index 0");
        assert_eq!(step.marks, Marks::one(0));
        assert_eq!(array.items(), &[6, 4]);

        let step = array.remove(Some(5)).next().unwrap();
        assert_eq!(step.message, "5 not found");
        assert_eq!(array.items(), &[6, 4]);

        let mut empty = ArrayList::new();
        assert_eq!(empty.remove(Some(1)).next().unwrap().message, "Array is empty");
    }

    #[test]
    fn search_probes_each_index() {
        let array = filled(&[9, 8, 7]);
        let steps: Vec<_> = array.search(8).collect();
        let messages: Vec<_> = steps.iter().map(|s| s.message.as_str()).collect();
        assert_eq!(messages, vec!["Checking index 0", "Checking index 1", "Found 8 at index 1"]);
        assert_eq!(array.search(1).last().unwrap().message, "1 not found");
    }
}
