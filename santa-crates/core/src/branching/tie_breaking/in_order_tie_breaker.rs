use super::TieBreaker;

/// A tie-breaker which simply selects the first variable that it receives with the minimum value.
///
/// For example, if there are two givers `g1` with 2 available receivers and `g2` with 2 available
/// receivers, and the tie-breaker first receives `g2` and then `g1`, then it will return `g2`
/// because it was the first giver with the minimum value (of 2 in this example) which was
/// provided.
#[derive(Debug)]
pub(crate) struct InOrderTieBreaker<Var, Value> {
    /// The selected variable, could be [None] if no variable has been considered yet
    selected_variable: Option<Var>,
    /// The selected value, could be [None] if no variable has been considered yet
    selected_value: Option<Value>,
}

impl<Var, Value> Default for InOrderTieBreaker<Var, Value> {
    fn default() -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
        }
    }
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_better = match self.selected_value.as_ref() {
            Some(selected_value) => value < *selected_value,
            None => true,
        };

        if is_better {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::InOrderTieBreaker;
    use crate::branching::tie_breaking::TieBreaker;

    #[test]
    fn test_selection_first_value() {
        let mut breaker = InOrderTieBreaker::default();

        breaker.consider('a', 10);
        breaker.consider('b', 10);
        breaker.consider('c', 10);

        assert_eq!(breaker.select(), Some('a'));
    }

    #[test]
    fn test_selection_picks_lowest_value() {
        let mut breaker = InOrderTieBreaker::default();

        breaker.consider('a', 10);
        breaker.consider('b', 5);
        breaker.consider('c', 10);
        breaker.consider('d', 5);

        assert_eq!(breaker.select(), Some('b'));
    }

    #[test]
    fn selection_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::default();

        breaker.consider('a', 1);
        assert_eq!(breaker.select(), Some('a'));
        assert_eq!(breaker.select(), None);
    }
}
