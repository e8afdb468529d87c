//! Rule-text boundedness heuristic.
//!
//! Decides, without parsing the rule grammar, whether the set of numbers a
//! plural rule matches is finite. The rule is split into `or` disjuncts and
//! `and` clauses; each clause is tokenized into an operand letter and a
//! relation and checked against a fixed list of predicates:
//!
//! | predicate                   | clause shape                          | proves          |
//! |-----------------------------|---------------------------------------|-----------------|
//! | `requires_zero_fraction`    | `v`/`w`/`f`/`t` `is 0`                | decimal         |
//! | `requires_nonzero_fraction` | `f`/`t` `is 1` or `is not 0`          | integer         |
//! | `is_plain` on `i`/`n`       | no `mod`, no `not`, no `!`            | integer         |
//! | `is_plain` on `n`           | as above, and no `within`             | decimal         |
//!
//! A disjunct counts as bounded as soon as it proves either side, so the
//! result is approximate in both directions: `i in 0..1` passes for
//! decimals, and a modulus rule without a fraction clause fails. Such
//! misjudgements surface later as a mismatch against the observed sample
//! count.

use smallvec::SmallVec;

const DISJUNCTION: &str = "or";
const CONJUNCTION: &str = "and";

/// One atomic relation of a rule, such as `n mod 10 in 2..4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<'a> {
    tokens: SmallVec<[&'a str; 8]>,
    operand: char,
    relation: String,
}

impl<'a> Clause<'a> {
    /// Tokenize a clause. Returns `None` for blank text.
    pub fn parse(text: &'a str) -> Option<Self> {
        let tokens: SmallVec<[&'a str; 8]> = text.split_whitespace().collect();
        Self::from_tokens(tokens)
    }

    fn from_tokens(tokens: SmallVec<[&'a str; 8]>) -> Option<Self> {
        let first = *tokens.first()?;
        let mut chars = first.chars();
        let operand = chars.next()?;

        let mut relation = String::from(chars.as_str());
        for token in &tokens[1..] {
            if !relation.is_empty() {
                relation.push(' ');
            }
            relation.push_str(token);
        }

        Some(Self {
            tokens,
            operand,
            relation,
        })
    }

    /// The operand letter (`n`, `i`, `v`, `w`, `f` or `t`).
    #[inline]
    pub fn operand(&self) -> char {
        self.operand
    }

    /// Everything after the operand letter, whitespace-normalized.
    #[inline]
    pub fn relation(&self) -> &str {
        &self.relation
    }

    fn has_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }

    /// The clause takes a remainder (`mod`).
    pub fn uses_modulus(&self) -> bool {
        self.has_token("mod")
    }

    /// The clause is negated (`not`, `!=`).
    pub fn is_negated(&self) -> bool {
        self.has_token("not") || self.tokens.iter().any(|t| t.contains('!'))
    }

    /// The clause uses a non-integral range test (`within`).
    pub fn uses_within(&self) -> bool {
        self.has_token("within")
    }

    /// Neither a remainder nor a negation: the clause pins its operand to a
    /// finite set.
    pub fn is_plain(&self) -> bool {
        !self.uses_modulus() && !self.is_negated()
    }

    /// The clause forbids visible fraction digits, so no decimal sample can
    /// satisfy it.
    pub fn requires_zero_fraction(&self) -> bool {
        matches!(self.operand, 'v' | 'w' | 'f' | 't') && self.relation == "is 0"
    }

    /// The clause demands a non-zero fraction, so no integer sample can
    /// satisfy it.
    pub fn requires_nonzero_fraction(&self) -> bool {
        matches!(self.operand, 'f' | 't') && (self.relation == "is 1" || self.relation == "is not 0")
    }

    /// A plain clause on the integer digits or the whole value.
    pub fn bounds_integers(&self) -> bool {
        self.is_plain() && matches!(self.operand, 'i' | 'n')
    }

    /// A plain, non-`within` clause on the whole value.
    pub fn bounds_decimals(&self) -> bool {
        self.is_plain() && self.operand == 'n' && !self.uses_within()
    }
}

/// Which sample classes a conjunction of clauses is known to bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClauseBounds {
    /// Only finitely many integers satisfy the conjunction.
    pub integer: bool,
    /// Only finitely many decimals satisfy the conjunction.
    pub decimal: bool,
}

impl ClauseBounds {
    /// At least one class is bounded, which is enough for the disjunct.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.integer || self.decimal
    }

    /// Both classes are bounded; later clauses cannot add anything.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.integer && self.decimal
    }
}

/// Group whitespace-separated tokens, splitting on a standalone keyword.
fn split_on_token<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    keyword: &str,
) -> Vec<SmallVec<[&'a str; 8]>> {
    let mut parts = vec![SmallVec::new()];
    for token in tokens {
        if token == keyword {
            parts.push(SmallVec::new());
        } else if let Some(current) = parts.last_mut() {
            current.push(token);
        }
    }
    parts
}

/// Bounds proven by one `and` conjunction.
///
/// When `for_integers` is set the decimal side starts out bounded, since
/// integer samples carry no fraction.
pub fn conjunction_bounds(conjunction: &str, for_integers: bool) -> ClauseBounds {
    bounds_of(
        split_on_token(conjunction.split_whitespace(), CONJUNCTION),
        for_integers,
    )
}

fn bounds_of<'a>(
    clauses: impl IntoIterator<Item = SmallVec<[&'a str; 8]>>,
    for_integers: bool,
) -> ClauseBounds {
    let mut bounds = ClauseBounds {
        integer: false,
        decimal: for_integers,
    };
    for tokens in clauses {
        let Some(clause) = Clause::from_tokens(tokens) else {
            continue;
        };
        bounds.decimal |= clause.requires_zero_fraction();
        bounds.integer |= clause.requires_nonzero_fraction();
        bounds.integer |= clause.bounds_integers();
        bounds.decimal |= clause.bounds_decimals();
        if bounds.is_complete() {
            break;
        }
    }
    bounds
}

/// Estimate from the rule text whether a keyword matches finitely many
/// samples of one class.
///
/// `None` is the implicit `other` rule and is never bounded. Otherwise the
/// rule is bounded when every `or` disjunct is, and a disjunct is rejected
/// only when its clauses prove neither the integer nor the decimal side.
/// For integers the decimal side starts out proven, so any explicit rule is
/// bounded there.
///
/// # Example
///
/// ```rust
/// use plural_samples::samples::compute_bounded;
///
/// assert!(compute_bounded(Some("n is 1"), false));
/// assert!(compute_bounded(Some("i is 1 and v is 0"), true));
/// assert!(compute_bounded(Some("v is 0 and i mod 10 is 1"), false));
/// assert!(!compute_bounded(Some("n mod 10 is 1"), false));
/// assert!(!compute_bounded(None, true));
/// ```
pub fn compute_bounded(rule: Option<&str>, for_integers: bool) -> bool {
    let Some(rule) = rule else {
        return false;
    };
    split_on_token(rule.split_whitespace(), DISJUNCTION)
        .into_iter()
        .all(|disjunct| bounds_of(split_on_token(disjunct, CONJUNCTION), for_integers).is_bounded())
}
