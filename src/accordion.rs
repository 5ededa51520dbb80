/// Outcome of a toggle. `closed` is always torn down before `opened` is set up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub closed: Option<String>,
    pub opened: Option<String>,
}

/// Single-open accordion over entry ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn toggle(&mut self, id: &str) -> Transition {
        if self.is_open(id) {
            return Transition {
                closed: self.open.take(),
                opened: None,
            };
        }
        let closed = self.open.replace(id.to_string());
        Transition {
            closed,
            opened: Some(id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.open_id(), None);
    }

    #[test]
    fn toggling_open_entry_closes_it() {
        let mut accordion = Accordion::default();
        accordion.toggle("qris");
        let t = accordion.toggle("qris");
        assert_eq!(t.closed.as_deref(), Some("qris"));
        assert_eq!(t.opened, None);
        assert_eq!(accordion.open_id(), None);
    }

    #[test]
    fn opening_another_entry_closes_the_previous_one() {
        let mut accordion = Accordion::default();
        let first = accordion.toggle("qris");
        assert_eq!(first.closed, None);
        assert_eq!(first.opened.as_deref(), Some("qris"));

        let second = accordion.toggle("dana");
        assert_eq!(second.closed.as_deref(), Some("qris"));
        assert_eq!(second.opened.as_deref(), Some("dana"));
        assert!(accordion.is_open("dana"));
        assert!(!accordion.is_open("qris"));
    }

    #[test]
    fn at_most_one_entry_open_over_any_sequence() {
        let ids = ["a", "b", "c"];
        let mut accordion = Accordion::default();
        for step in 0..30 {
            accordion.toggle(ids[(step * 7) % 3]);
            let open = ids.iter().filter(|id| accordion.is_open(id)).count();
            assert!(open <= 1);
        }
    }
}
