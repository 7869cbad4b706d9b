//! Bounded FIFO queue

use super::{Container, Deletable, Insertable, Peekable, StructureKind, BOUNDED_CAPACITY};
use crate::step::{Cell, Marks, OpRun, Value};
use std::collections::VecDeque;

pub struct Queue {
    items: VecDeque<Value>,
}

impl Queue {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::with_capacity(BOUNDED_CAPACITY),
        }
    }

    pub fn front(&self) -> Option<Value> {
        self.items.front().copied()
    }

    pub fn enqueue(&mut self, value: Value) -> OpRun {
        if self.items.len() >= BOUNDED_CAPACITY {
            return OpRun::single(self.to_array(), Marks::NONE, "Queue is full");
        }
        self.items.push_back(value);
        OpRun::single(
            self.to_array(),
            Marks::one(self.items.len() - 1),
            format!("Enqueued {}", value),
        )
    }

    pub fn dequeue(&mut self) -> OpRun {
        match self.items.pop_front() {
            Some(value) => {
                OpRun::single(self.to_array(), Marks::NONE, format!("Dequeued {}", value))
            }
            None => OpRun::single(Vec::new(), Marks::NONE, "Queue is empty"),
        }
    }

    pub fn peek_front(&self) -> OpRun {
        match self.front() {
            Some(value) => {
                OpRun::single(self.to_array(), Marks::one(0), format!("Peeked at {}", value))
            }
            None => OpRun::single(Vec::new(), Marks::NONE, "Queue is empty"),
        }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Insertable for Queue {
    fn insert(&mut self, value: Value) -> OpRun {
        self.enqueue(value)
    }
}

impl Deletable for Queue {
    fn delete(&mut self, _value: Option<Value>) -> OpRun {
        self.dequeue()
    }
}

impl Peekable for Queue {
    fn peek(&self) -> OpRun {
        self.peek_front()
    }
}

impl Container for Queue {
    fn kind(&self) -> StructureKind {
        StructureKind::Queue
    }

    fn to_array(&self) -> Vec<Cell> {
        self.items.iter().copied().map(Some).collect()
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

    fn peekable(&self) -> Option<&dyn Peekable> {
        Some(self)
    }
}
