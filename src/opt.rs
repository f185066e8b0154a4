// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use crate::error::{Error, Result};

const OPT_PREFIX: char = '-';
const SHORT_OPT_PREFIX: &str = "-";
const LONG_OPT_PREFIX: &str = "--";

/// Separates the names of an option when displayed.
const NAME_SEPARATOR: &str = "|";

const VALUE_STR: &str = " <value>";
const GREEDY_VALUE_STR: &str = " [value]...";

/// Largest number of values an [Arity::Fixed] option can take.
pub const MAX_VALUES: usize = 1024;

/// Returns the canonical (dash-prefixed) form of an option name.
///
/// Any leading dashes are ignored: a single character name is rendered as
/// `-x`, anything longer as `--xyz`.
///
/// ```rust
/// use takeopt::canonical;
///
/// assert_eq!(canonical("v"), "-v");
/// assert_eq!(canonical("--v"), "-v");
/// assert_eq!(canonical("-verbose"), "--verbose");
/// ```
pub fn canonical(name: &str) -> String {
    let name = name.trim_start_matches(OPT_PREFIX);

    format!("{}{}", prefix_for(name), name)
}

fn prefix_for(name: &str) -> &'static str {
    if name.chars().count() == 1 {
        SHORT_OPT_PREFIX
    } else {
        LONG_OPT_PREFIX
    }
}

/// Strip the leading dashes from a caller supplied name and check what
/// remains is usable.
fn normalise(name: &str) -> Result<String> {
    let stripped = name.trim_start_matches(OPT_PREFIX);

    if stripped.trim().is_empty() {
        return Err(Error::EmptyName);
    }

    if stripped.chars().any(char::is_whitespace) {
        return Err(Error::InvalidName { name: name.into() });
    }

    Ok(stripped.into())
}

/// The number of values that follow an option on the command-line.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Arity {
    /// Option is a stand-alone flag (no values).
    Flag,
    /// Option needs exactly this many values.
    Fixed(usize),
    /// Option consumes every argument that follows it.
    Greedy,
}

impl Default for Arity {
    fn default() -> Self {
        Arity::Flag
    }
}

impl From<usize> for Arity {
    fn from(count: usize) -> Self {
        match count {
            0 => Arity::Flag,
            n => Arity::Fixed(n),
        }
    }
}

impl Arity {
    /// Number of values the option needs, or [None] for [Arity::Greedy].
    pub fn count(&self) -> Option<usize> {
        match self {
            Arity::Flag => Some(0),
            Arity::Fixed(n) => Some(*n),
            Arity::Greedy => None,
        }
    }
}

/// The value(s) returned by [Opt::take_args()].
///
/// Values taken from the command-line are always `Some`. `None` entries
/// only appear in defaults returned for an option that was not found.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Values {
    /// A single value (options needing exactly one value).
    One(Option<String>),
    /// An ordered list of values (options needing more than one value,
    /// and greedy options).
    Many(Vec<Option<String>>),
}

impl Values {
    /// Returns the first value.
    pub fn one(self) -> Option<String> {
        match self {
            Values::One(value) => value,
            Values::Many(values) => values.into_iter().next().flatten(),
        }
    }

    /// Returns the values as a list.
    ///
    /// A [Values::One] becomes a list of one entry.
    pub fn into_vec(self) -> Vec<Option<String>> {
        match self {
            Values::One(value) => vec![value],
            Values::Many(values) => values,
        }
    }

    /// Returns exactly `N` values, padding with `None` or dropping
    /// any extra values, so the result can always be destructured.
    ///
    /// ```rust
    /// use takeopt::Values;
    ///
    /// let [a, b] = Values::Many(vec![None, None]).into_array();
    /// assert_eq!((a, b), (None, None));
    /// ```
    pub fn into_array<const N: usize>(self) -> [Option<String>; N] {
        let mut values = self.into_vec().into_iter();

        std::array::from_fn(|_| values.next().flatten())
    }

    /// Returns only the values that were actually set.
    pub fn strings(self) -> Vec<String> {
        self.into_vec().into_iter().flatten().collect()
    }

    /// Returns true if no value is set.
    pub fn is_empty(&self) -> bool {
        match self {
            Values::One(value) => value.is_none(),
            Values::Many(values) => values.iter().all(Option::is_none),
        }
    }
}

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Values::One(Some(value.into()))
    }
}

impl From<String> for Values {
    fn from(value: String) -> Self {
        Values::One(Some(value))
    }
}

impl From<Option<String>> for Values {
    fn from(value: Option<String>) -> Self {
        Values::One(value)
    }
}

impl From<Vec<&str>> for Values {
    fn from(values: Vec<&str>) -> Self {
        Values::Many(values.into_iter().map(|v| Some(v.into())).collect())
    }
}

impl From<Vec<String>> for Values {
    fn from(values: Vec<String>) -> Self {
        Values::Many(values.into_iter().map(Some).collect())
    }
}

/// A command-line option that can be plucked out of an argument list.
///
/// An `Opt` has one or more names and an [Arity]. It holds no parse state
/// so the same `Opt` can be used on any number of argument lists (from
/// any number of threads).
///
/// # Note
///
/// Names are stored without their leading dashes: see [canonical()] for
/// how they are matched and displayed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Opt {
    names: Vec<String>,
    arity: Arity,
    default: Option<Values>,
}

impl Opt {
    /// Create a new flag option with the specified names.
    ///
    /// The first name is the primary one. Names may be specified with or
    /// without leading dashes and duplicates are ignored.
    ///
    /// # Errors
    ///
    /// - [Error::NoNames] if `names` is empty.
    /// - [Error::EmptyName] if a name is empty or only dashes.
    /// - [Error::InvalidName] if a name contains whitespace.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalised = Vec::<String>::new();

        for name in names {
            let name = normalise(name.as_ref())?;

            if !normalised.contains(&name) {
                normalised.push(name);
            }
        }

        if normalised.is_empty() {
            return Err(Error::NoNames);
        }

        Ok(Opt {
            names: normalised,
            arity: Arity::default(),
            default: None,
        })
    }

    /// Create an option from names known to be valid.
    pub(crate) fn from_valid(names: &[&str]) -> Self {
        Opt {
            names: names.iter().map(|n| n.to_string()).collect(),
            arity: Arity::default(),
            default: None,
        }
    }

    /// Specify how many values follow the option.
    ///
    /// Accepts a count (where `0` means a flag) or an [Arity]. Replaces any
    /// previously specified arity.
    ///
    /// # Errors
    ///
    /// [Error::TooManyValues] if the count is larger than [MAX_VALUES].
    pub fn takes(self, arity: impl Into<Arity>) -> Result<Self> {
        let arity = match arity.into() {
            Arity::Fixed(0) => Arity::Flag,
            Arity::Fixed(n) if n > MAX_VALUES => {
                return Err(Error::TooManyValues {
                    name: self.canonical_names(),
                    count: n,
                    max: MAX_VALUES,
                })
            }
            arity => arity,
        };

        Ok(Opt { arity, ..self })
    }

    /// Specify the value returned by [Opt::take_args()] when the option is
    /// not found.
    pub fn default_value(self, values: impl Into<Values>) -> Self {
        Opt {
            default: Some(values.into()),
            ..self
        }
    }

    /// The option names (without dashes) in the order specified.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The number of values the option takes.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// The canonical form of the primary name.
    pub fn name(&self) -> String {
        // Note: indexing safe as an Opt always has at least one name.
        canonical(&self.names[0])
    }

    /// The canonical form of all names, separated by `|`.
    pub fn canonical_names(&self) -> String {
        self.names
            .iter()
            .map(|n| canonical(n))
            .collect::<Vec<String>>()
            .join(NAME_SEPARATOR)
    }

    /// Usage string such as `-f|--file <value>`.
    pub fn usage(&self) -> String {
        self.to_string()
    }

    /// Determine if the command-line argument is this option.
    ///
    /// Matching is exact: `--file=foo`, `-fx` and the like never match.
    pub fn matches(&self, arg: &str) -> bool {
        self.names
            .iter()
            .any(|name| arg.strip_prefix(prefix_for(name)) == Some(name.as_str()))
    }

    fn position(&self, args: &[String]) -> Option<usize> {
        args.iter().position(|arg| self.matches(arg))
    }

    /// Remove the first occurrence of the flag from `args`.
    ///
    /// Returns true if the flag was found, else false. Nothing else is
    /// removed from `args`.
    ///
    /// # Errors
    ///
    /// [Error::NotAFlag] if the option takes values.
    pub fn take_flag(&self, args: &mut Vec<String>) -> Result<bool> {
        if self.arity != Arity::Flag {
            return Err(Error::NotAFlag {
                usage: self.usage(),
            });
        }

        match self.position(args) {
            Some(index) => {
                let arg = args.remove(index);
                log::debug!("took flag {:?} from position {}", arg, index);

                Ok(true)
            }
            None => {
                log::trace!("flag '{}' not found in {:?}", self, args);

                Ok(false)
            }
        }
    }

    /// Remove the first occurrence of the option and its values from
    /// `args`, returning the values.
    ///
    /// - An option taking a single value returns [Values::One].
    /// - An option taking more than one value, or a greedy option, returns
    ///   [Values::Many] in command-line order.
    ///
    /// If the option is not found and `raises` is false, the default is
    /// returned and `args` is untouched. Unless an explicit default was
    /// specified, an option taking `N > 1` values defaults to `N` `None`
    /// entries so the result can always be unpacked.
    ///
    /// # Errors
    ///
    /// - [Error::IsAFlag] if the option does not take values.
    /// - [Error::MissingOpt] if the option is not found and `raises` is set.
    /// - [Error::NotEnoughArgs] if too few values follow the option. `args`
    ///   is left unmodified.
    pub fn take_args(&self, args: &mut Vec<String>, raises: bool) -> Result<Values> {
        let count = match self.arity {
            Arity::Flag => {
                return Err(Error::IsAFlag {
                    usage: self.usage(),
                })
            }
            Arity::Fixed(n) => Some(n),
            Arity::Greedy => None,
        };

        let index = match self.position(args) {
            Some(index) => index,
            None => return self.absent(args, raises),
        };

        let end = match count {
            Some(n) => {
                let available = args.len() - (index + 1);

                if available < n {
                    return Err(Error::NotEnoughArgs {
                        expected: n,
                        usage: self.usage(),
                        found: args[index + 1..].to_vec(),
                    });
                }

                index + 1 + n
            }
            None => args.len(),
        };

        // Remove the values before the option itself so the indices
        // remain valid.
        let values: Vec<String> = args.drain(index + 1..end).collect();
        let arg = args.remove(index);

        log::debug!(
            "took option {:?} from position {} with values {:?}",
            arg,
            index,
            values
        );

        let values = match count {
            Some(1) => Values::One(values.into_iter().next()),
            _ => Values::Many(values.into_iter().map(Some).collect()),
        };

        Ok(values)
    }

    /// Same as [Opt::take_args()], but the option must be specified.
    pub fn require_args(&self, args: &mut Vec<String>) -> Result<Values> {
        self.take_args(args, true)
    }

    fn absent(&self, args: &[String], raises: bool) -> Result<Values> {
        log::trace!("option '{}' not found in {:?}", self, args);

        if raises {
            return Err(Error::MissingOpt {
                name: self.canonical_names(),
            });
        }

        if let Some(default) = &self.default {
            return Ok(default.clone());
        }

        let values = match self.arity {
            Arity::Fixed(n) if n > 1 => Values::Many(vec![None; n]),
            _ => Values::One(None),
        };

        Ok(values)
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.canonical_names())?;

        match self.arity {
            Arity::Flag => Ok(()),
            Arity::Fixed(n) => (0..n).try_for_each(|_| write!(f, "{}", VALUE_STR)),
            Arity::Greedy => write!(f, "{}", GREEDY_VALUE_STR),
        }
    }
}
