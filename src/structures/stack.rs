//! Bounded LIFO stack

use super::{Container, Deletable, Insertable, Peekable, StructureKind, BOUNDED_CAPACITY};
use crate::step::{cells_of, Cell, Marks, OpRun, Value};

pub struct Stack {
    items: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            items: Vec::with_capacity(BOUNDED_CAPACITY),
        }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn top(&self) -> Option<Value> {
        self.items.last().copied()
    }

    /// Fails softly once the stack holds [`BOUNDED_CAPACITY`] items
    pub fn push(&mut self, value: Value) -> OpRun {
        if self.items.len() >= BOUNDED_CAPACITY {
            return OpRun::single(self.to_array(), Marks::NONE, "Stack is full");
        }
        self.items.push(value);
        OpRun::single(
            self.to_array(),
            Marks::one(self.items.len() - 1),
            format!("Pushed {} onto stack", value),
        )
    }

    pub fn pop(&mut self) -> OpRun {
        match self.items.pop() {
            Some(value) => OpRun::single(
                self.to_array(),
                Marks::NONE,
                format!("Popped {} from stack", value),
            ),
            None => OpRun::single(Vec::new(), Marks::NONE, "Stack is empty"),
        }
    }

    pub fn peek_top(&self) -> OpRun {
        match self.top() {
            Some(value) => OpRun::single(
                self.to_array(),
                Marks::one(self.items.len() - 1),
                format!("Peeked at {}", value),
            ),
            None => OpRun::single(Vec::new(), Marks::NONE, "Stack is empty"),
        }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Insertable for Stack {
    fn insert(&mut self, value: Value) -> OpRun {
        self.push(value)
    }
}

impl Deletable for Stack {
    fn delete(&mut self, _value: Option<Value>) -> OpRun {
        self.pop()
    }
}

impl Peekable for Stack {
    fn peek(&self) -> OpRun {
        self.peek_top()
    }
}

impl Container for Stack {
    fn kind(&self) -> StructureKind {
        StructureKind::Stack
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

    fn peekable(&self) -> Option<&dyn Peekable> {
        Some(self)
    }
}
