use super::*;

pub(crate) static DATE_HINT: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)(?:^|[\s_-])(?:start|end)?dates?(?:$|[\s_-])").unwrap()
});

pub(crate) static LOCATION_HINT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)venue|location").unwrap());

pub(crate) static MONTH_DAY_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(concat!(
    r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|",
    r"june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|",
    r"nov(?:ember)?|dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?",
    r"(?:\s*[-–]\s*\d{1,2}(?:st|nd|rd|th)?)?,?\s+\d{4}\b"
  ))
  .unwrap()
});

pub(crate) static PARAGRAPH_EXCLUSION: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)^(on-sale|view|purchase|at\s+[A-Z])").unwrap()
});
