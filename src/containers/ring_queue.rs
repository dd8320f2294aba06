//! Growable ring-buffer FIFO, the per-VOQ packet queue primitive (§4.5/§8).
//!
//! A plain circular buffer over a `Vec<Option<T>>`: `head`/`tail` indices
//! wrap modulo capacity, and capacity doubles (copying live elements into
//! natural order) when a push would overflow. This is the "ring-buffer
//! queue" component from the system overview table, not VOQ-matrix logic
//! itself — `VoqMatrix` in `voq.rs` is an `N*N` array of these.

pub struct RingQueue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

const INITIAL_CAPACITY: usize = 8;

impl<T> RingQueue<T> {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        let idx = (self.head + self.len) % self.buf.len();
        self.buf[idx] = Some(value);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        value
    }

    fn grow(&mut self) {
        let old_capacity = self.buf.len();
        let new_capacity = if old_capacity == 0 {
            INITIAL_CAPACITY
        } else {
            old_capacity * 2
        };

        let mut new_buf: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        for i in 0..self.len {
            new_buf.push(self.buf[(self.head + i) % old_capacity.max(1)].take());
        }
        new_buf.resize_with(new_capacity, || None);

        self.buf = new_buf;
        self.head = 0;
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
