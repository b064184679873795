use crate::interpreter::lexer::Token;

/// Identifies one node of a [`TokenSeq`].
///
/// Ids are plain arena indices: copyable, comparable, and safe to hold across
/// removals of *other* nodes. An id becomes invalid once its own node is
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Slot {
    token: Option<Token>,
    prev:  Option<NodeId>,
    next:  Option<NodeId>,
}

/// An ordered, doubly-traversable sequence of tokens.
///
/// Nodes live in a growable arena and carry their neighbor links as plain
/// `Option<NodeId>` indices, so splicing a node out relinks its neighbors
/// without any pointer aliasing. The reducer mutates a sequence in place:
/// it rewrites the numbers stored at surviving nodes and removes consumed
/// ones, but never inserts.
///
/// ## Usage
///
/// A sequence is built once by appending lexed tokens in order, then handed
/// to the reducer. Removal vacates the arena slot; slots are not reused,
/// which is fine for the single-pass, single-line lifetime of a sequence.
#[derive(Debug, Clone, Default)]
pub struct TokenSeq {
    slots: Vec<Slot>,
    head:  Option<NodeId>,
    tail:  Option<NodeId>,
    len:   usize,
}

impl TokenSeq {
    /// Creates an empty token sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new(),
               head:  None,
               tail:  None,
               len:   0, }
    }

    /// Appends a token at the tail in O(1).
    ///
    /// The new node's predecessor link is set to the prior tail and its
    /// successor link to none; the head is fixed up when this is the first
    /// element.
    ///
    /// # Parameters
    /// - `token`: The token to store at the new tail node.
    ///
    /// # Returns
    /// The id of the newly appended node.
    ///
    /// # Examples
    /// ```
    /// use lineval::interpreter::{lexer::Token, sequence::TokenSeq};
    ///
    /// let mut seq = TokenSeq::new();
    /// let first = seq.append(Token::Number(1.0));
    /// let second = seq.append(Token::Number(2.0));
    ///
    /// assert_eq!(seq.head(), Some(first));
    /// assert_eq!(seq.tail(), Some(second));
    /// assert_eq!(seq.next(first), Some(second));
    /// assert_eq!(seq.prev(second), Some(first));
    /// ```
    pub fn append(&mut self, token: Token) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot { token: Some(token),
                               prev:  self.tail,
                               next:  None, });

        if let Some(tail) = self.tail {
            self.slots[tail.0].next = Some(id);
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
        self.len += 1;

        id
    }

    /// Removes a node in O(1), relinking its neighbors to bypass it.
    ///
    /// Head and tail are updated when an endpoint is removed. The vacated id
    /// must not be used again.
    ///
    /// # Parameters
    /// - `id`: The node to detach.
    ///
    /// # Returns
    /// The token that was stored at the removed node.
    ///
    /// # Panics
    /// Panics if the node was already removed. This is a defensive internal
    /// invariant; the reducer removes every node at most once.
    ///
    /// # Examples
    /// ```
    /// use lineval::interpreter::{lexer::Token, sequence::TokenSeq};
    ///
    /// let mut seq = TokenSeq::new();
    /// let a = seq.append(Token::Number(1.0));
    /// let b = seq.append(Token::Number(2.0));
    /// let c = seq.append(Token::Number(3.0));
    ///
    /// assert_eq!(seq.remove(b), Token::Number(2.0));
    /// assert_eq!(seq.next(a), Some(c));
    /// assert_eq!(seq.prev(c), Some(a));
    /// assert_eq!(seq.len(), 2);
    /// ```
    pub fn remove(&mut self, id: NodeId) -> Token {
        let slot = &mut self.slots[id.0];
        let token = slot.token.take().expect("token was already removed from the sequence");
        let prev = slot.prev.take();
        let next = slot.next.take();

        match prev {
            Some(prev) => self.slots[prev.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next.0].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;

        token
    }

    /// Returns the id of the first node, if any.
    #[must_use]
    pub const fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the id of the last node, if any.
    #[must_use]
    pub const fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the successor of a node, if any.
    #[must_use]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].next
    }

    /// Returns the predecessor of a node, if any.
    #[must_use]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].prev
    }

    /// Returns the token stored at a node.
    ///
    /// # Panics
    /// Panics if the node was removed; a defensive internal invariant.
    #[must_use]
    pub fn token(&self, id: NodeId) -> &Token {
        self.slots[id.0].token.as_ref().expect("token was already removed from the sequence")
    }

    /// Returns mutable access to the token stored at a node.
    ///
    /// The folding passes use this to rewrite a surviving number in place.
    ///
    /// # Panics
    /// Panics if the node was removed; a defensive internal invariant.
    pub fn token_mut(&mut self, id: NodeId) -> &mut Token {
        self.slots[id.0].token.as_mut().expect("token was already removed from the sequence")
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the sequence holds no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the live tokens from head to tail.
    ///
    /// # Examples
    /// ```
    /// use lineval::interpreter::{lexer::Token, sequence::TokenSeq};
    ///
    /// let seq: TokenSeq = [Token::Number(1.0), Token::Number(2.0)].into_iter().collect();
    /// let values: Vec<_> = seq.tokens().copied().collect();
    ///
    /// assert_eq!(values, vec![Token::Number(1.0), Token::Number(2.0)]);
    /// ```
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let id = cursor?;
            cursor = self.next(id);
            Some(self.token(id))
        })
    }
}

impl FromIterator<Token> for TokenSeq {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut seq = Self::new();
        for token in iter {
            seq.append(token);
        }
        seq
    }
}
