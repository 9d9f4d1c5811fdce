#![deny(warnings)]

/// Cursor over an iterator with one item of lookahead. Consumed items stay
/// buffered until `extract` or `ignore` drops them.
pub struct Scanner<I: Iterator> {
    src: I,
    buf: Vec<I::Item>,
    pos: usize, // buffered items already consumed
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.peek()?;
        self.pos += 1;
        Some(item)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: 0}
    }

    // pull from the source until buf[pos] exists, false on exhaustion
    fn prep_buffer(&mut self) -> bool {
        while self.pos >= self.buf.len() {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => return false,
            }
        }
        true
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.prep_buffer() {
            Some(self.buf[self.pos].clone())
        } else {
            None
        }
    }

    pub fn ignore(&mut self) {
        self.extract();
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.buf.drain(..self.pos).collect();
        self.pos = 0;
        items
    }

    /// Consume the next item only if it satisfies `pred`.
    pub fn accept_if(&mut self, pred: impl Fn(&I::Item) -> bool) -> Option<I::Item> {
        let next = self.peek()?;
        if !pred(&next) {
            return None;
        }
        self.pos += 1;
        Some(next)
    }

    // Consume every leading item matching `pred`, returns if the scanner advanced
    pub fn skip_all_if(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_if(|next| next == what)
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}
