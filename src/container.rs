/// Contenedor de un ingrediente. Lleva cuanto queda y cuanto se consumio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub remaining: u64,
    pub consumed: u64,
}

impl Container {
    pub fn new(initial_capacity: u64) -> Container {
        Container {
            remaining: initial_capacity,
            consumed: 0,
        }
    }

    pub fn has_at_least(&self, quantity: u64) -> bool {
        quantity <= self.remaining
    }

    /// Saca la cantidad pedida. Devuelve `None` y no cambia nada si no alcanza.
    pub fn consume(&mut self, quantity: u64) -> Option<u64> {
        let remaining = self.remaining.checked_sub(quantity)?;
        self.remaining = remaining;
        self.consumed += quantity;
        Some(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_consume_from_the_container() {
        let mut container = Container::new(100);
        assert_eq!(Some(75), container.consume(25));
        assert_eq!(75, container.remaining);
        assert_eq!(25, container.consumed);
    }

    #[test]
    fn should_not_consume_more_than_remaining() {
        let mut container = Container::new(10);
        assert_eq!(None, container.consume(11));
        assert_eq!(Container::new(10), container);
    }
}
