//! # Barcode Specs
//!
//! Validated, immutable barcode descriptors. Each spec type has a
//! fallible `create` factory that checks content and normalizes it
//! (computing or verifying check digits for the numeric symbologies);
//! an invalid input never produces a spec, so converting a spec into a
//! [`Command`] cannot fail.
//!
//! ```
//! use recibo::barcode::{Ean13Spec, QrCodeSpec};
//! use recibo::{HriPosition, QrCorrectionLevel};
//!
//! let _qr = QrCodeSpec::create("https://example.com", QrCorrectionLevel::M)?;
//!
//! // 12 digits in, 13 out: the check digit is computed and appended.
//! let ean = Ean13Spec::create("400638133393", HriPosition::Below)?;
//! assert_eq!(ean.content(), "4006381333931");
//! # Ok::<(), recibo::BarcodeError>(())
//! ```
//!
//! Barcode printing is not affected by styles such as `bold` or
//! `underline`; it is affected by `text_size` on most firmwares.
//!
//! ## Capacity Limits
//!
//! | Symbology | Max content |
//! |-----------|-------------|
//! | QR | 7089 |
//! | Aztec | 3832 |
//! | Data Matrix | 3116 |
//!
//! The upper limits are only reachable with fully numeric content; the
//! realistic limit for arbitrary text is far lower.

use crate::error::BarcodeError;
use crate::protocol::command::{Command, HriPosition, QrCorrectionLevel};

/// Maximum QR content length (version 40, numeric mode).
const QR_MAX_LENGTH: usize = 7089;
/// Maximum Aztec content length (151x151 symbol, digit mode).
const AZTEC_MAX_LENGTH: usize = 3832;
/// Maximum Data Matrix content length (144x144 symbol, numeric mode).
const DATA_MATRIX_MAX_LENGTH: usize = 3116;

/// Any validated barcode, ready to be appended to a print job.
///
/// Obtained from the individual spec factories via `From`/`Into`;
/// there is no way to construct one around invalid content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarcodeSpec {
    QrCode(QrCodeSpec),
    AztecCode(AztecCodeSpec),
    DataMatrix(DataMatrixSpec),
    UpcA(UpcASpec),
    Ean13(Ean13Spec),
    Ean8(Ean8Spec),
}

impl BarcodeSpec {
    /// Convert this spec into its protocol command.
    pub(crate) fn into_command(self) -> Command {
        match self {
            BarcodeSpec::QrCode(spec) => Command::QrCode {
                content: spec.content,
                ec_level: spec.ec_level,
            },
            BarcodeSpec::AztecCode(spec) => Command::AztecCode {
                content: spec.content,
                ec_percent: spec.ec_percent,
            },
            BarcodeSpec::DataMatrix(spec) => Command::DataMatrix {
                content: spec.content,
            },
            BarcodeSpec::UpcA(spec) => Command::UpcA {
                content: spec.content,
                hri: spec.hri,
            },
            BarcodeSpec::Ean13(spec) => Command::Ean13 {
                content: spec.content,
                hri: spec.hri,
            },
            BarcodeSpec::Ean8(spec) => Command::Ean8 {
                content: spec.content,
                hri: spec.hri,
            },
        }
    }
}

macro_rules! impl_into_barcode_spec {
    ($($spec:ident => $variant:ident),* $(,)?) => {
        $(impl From<$spec> for BarcodeSpec {
            fn from(spec: $spec) -> Self {
                BarcodeSpec::$variant(spec)
            }
        })*
    };
}

impl_into_barcode_spec!(
    QrCodeSpec => QrCode,
    AztecCodeSpec => AztecCode,
    DataMatrixSpec => DataMatrix,
    UpcASpec => UpcA,
    Ean13Spec => Ean13,
    Ean8Spec => Ean8,
);

/// A QR code symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCodeSpec {
    content: String,
    ec_level: QrCorrectionLevel,
}

impl QrCodeSpec {
    /// Validate QR content.
    ///
    /// `content` must be 1 to 7089 characters. The 7k limit is only
    /// reachable with fully numeric content; the realistic limit for
    /// arbitrary text is about 2k.
    pub fn create(
        content: impl Into<String>,
        ec_level: QrCorrectionLevel,
    ) -> Result<Self, BarcodeError> {
        let content = non_empty_with_limit(content.into(), QR_MAX_LENGTH)?;
        Ok(Self { content, ec_level })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn ec_level(&self) -> QrCorrectionLevel {
        self.ec_level
    }
}

/// An Aztec code symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AztecCodeSpec {
    content: String,
    ec_percent: u8,
}

impl AztecCodeSpec {
    /// Validate Aztec content.
    ///
    /// `content` must be 1 to 3832 characters. `ec_percent` is the
    /// error-correction overhead; values outside `5..=95` are coerced
    /// into it rather than rejected (23 is the symbology's recommended
    /// default).
    pub fn create(content: impl Into<String>, ec_percent: i32) -> Result<Self, BarcodeError> {
        let content = non_empty_with_limit(content.into(), AZTEC_MAX_LENGTH)?;
        Ok(Self {
            content,
            ec_percent: ec_percent.clamp(5, 95) as u8,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn ec_percent(&self) -> u8 {
        self.ec_percent
    }
}

/// A Data Matrix symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMatrixSpec {
    content: String,
}

impl DataMatrixSpec {
    /// Validate Data Matrix content: 1 to 3116 characters.
    pub fn create(content: impl Into<String>) -> Result<Self, BarcodeError> {
        let content = non_empty_with_limit(content.into(), DATA_MATRIX_MAX_LENGTH)?;
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A UPC-A barcode (12-digit standard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcASpec {
    content: String,
    hri: HriPosition,
}

impl UpcASpec {
    /// Validate UPC-A content.
    ///
    /// Accepts 11 digits (check digit is computed and appended) or
    /// 12 digits (supplied check digit is verified).
    pub fn create(content: impl Into<String>, hri: HriPosition) -> Result<Self, BarcodeError> {
        let content = normalize_numeric(content.into(), 12)?;
        Ok(Self { content, hri })
    }

    /// The normalized 12-digit content, check digit included.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hri(&self) -> HriPosition {
        self.hri
    }
}

/// An EAN-13 barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ean13Spec {
    content: String,
    hri: HriPosition,
}

impl Ean13Spec {
    /// Validate EAN-13 content.
    ///
    /// Accepts 12 digits (check digit is computed and appended) or
    /// 13 digits (supplied check digit is verified).
    pub fn create(content: impl Into<String>, hri: HriPosition) -> Result<Self, BarcodeError> {
        let content = normalize_numeric(content.into(), 13)?;
        Ok(Self { content, hri })
    }

    /// The normalized 13-digit content, check digit included.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hri(&self) -> HriPosition {
        self.hri
    }
}

/// An EAN-8 barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ean8Spec {
    content: String,
    hri: HriPosition,
}

impl Ean8Spec {
    /// Validate EAN-8 content.
    ///
    /// Accepts 7 digits (check digit is computed and appended) or
    /// 8 digits (supplied check digit is verified).
    pub fn create(content: impl Into<String>, hri: HriPosition) -> Result<Self, BarcodeError> {
        let content = normalize_numeric(content.into(), 8)?;
        Ok(Self { content, hri })
    }

    /// The normalized 8-digit content, check digit included.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hri(&self) -> HriPosition {
        self.hri
    }
}

/// Reject empty content and content longer than `limit` characters.
fn non_empty_with_limit(content: String, limit: usize) -> Result<String, BarcodeError> {
    if content.is_empty() {
        return Err(BarcodeError::EmptyContent);
    }
    if content.chars().count() > limit {
        return Err(BarcodeError::TooLong { limit });
    }
    Ok(content)
}

/// Validate digit-only content for a `full_len`-digit symbology and
/// normalize it to full length.
///
/// Input of `full_len - 1` digits gets the computed check digit
/// appended; input of `full_len` digits has its last digit verified
/// against the computed one.
fn normalize_numeric(content: String, full_len: usize) -> Result<String, BarcodeError> {
    if content.is_empty() {
        return Err(BarcodeError::EmptyContent);
    }
    for (index, character) in content.chars().enumerate() {
        if !character.is_ascii_digit() {
            return Err(BarcodeError::IllegalCharacter { index, character });
        }
    }

    let digits: Vec<u8> = content.bytes().map(|b| b - b'0').collect();

    if digits.len() == full_len - 1 {
        let check = check_digit(&digits);
        let mut content = content;
        content.push(char::from(b'0' + check));
        Ok(content)
    } else if digits.len() == full_len {
        let expected = check_digit(&digits[..full_len - 1]);
        let actual = digits[full_len - 1];
        if expected != actual {
            return Err(BarcodeError::InvalidCheckDigit { expected, actual });
        }
        Ok(content)
    } else {
        Err(BarcodeError::IncorrectLength {
            expected: full_len,
            actual: digits.len(),
        })
    }
}

/// UPC/EAN check digit: alternating 3/1 weights with weight 3 on the
/// rightmost payload digit, `check = (10 - sum mod 10) mod 10`.
///
/// Stated per symbology the weights run in opposite directions (UPC-A
/// counts weight 3 from the left on even positions, EAN from the right),
/// but for every payload length in this family the two descriptions
/// select the same digits.
fn check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 3 } else { 1 };
            u32::from(d) * weight
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_known_values() {
        // GTIN examples with published check digits
        assert_eq!(check_digit(&[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5]), 2);
        assert_eq!(check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        assert_eq!(check_digit(&[9, 6, 3, 8, 5, 0, 7]), 4);
    }

    #[test]
    fn test_qr_rejects_empty_and_too_long() {
        assert_eq!(
            QrCodeSpec::create("", QrCorrectionLevel::Q),
            Err(BarcodeError::EmptyContent)
        );
        assert!(QrCodeSpec::create("1".repeat(7089), QrCorrectionLevel::Q).is_ok());
        assert_eq!(
            QrCodeSpec::create("1".repeat(7090), QrCorrectionLevel::Q),
            Err(BarcodeError::TooLong { limit: 7089 })
        );
    }

    #[test]
    fn test_aztec_limits_and_ec_coercion() {
        assert_eq!(AztecCodeSpec::create("", 23), Err(BarcodeError::EmptyContent));
        assert_eq!(
            AztecCodeSpec::create("1".repeat(3833), 23),
            Err(BarcodeError::TooLong { limit: 3832 })
        );

        assert_eq!(AztecCodeSpec::create("hello", -5).unwrap().ec_percent(), 5);
        assert_eq!(AztecCodeSpec::create("hello", 100).unwrap().ec_percent(), 95);
        assert_eq!(AztecCodeSpec::create("hello", 23).unwrap().ec_percent(), 23);
    }

    #[test]
    fn test_data_matrix_limits() {
        assert_eq!(DataMatrixSpec::create(""), Err(BarcodeError::EmptyContent));
        assert!(DataMatrixSpec::create("1".repeat(3116)).is_ok());
        assert_eq!(
            DataMatrixSpec::create("1".repeat(3117)),
            Err(BarcodeError::TooLong { limit: 3116 })
        );
    }

    #[test]
    fn test_upca_computes_check_digit() {
        let spec = UpcASpec::create("03600029145", HriPosition::Below).unwrap();
        assert_eq!(spec.content(), "036000291452");
    }

    #[test]
    fn test_upca_verifies_check_digit() {
        assert!(UpcASpec::create("036000291452", HriPosition::Below).is_ok());
        assert_eq!(
            UpcASpec::create("036000291453", HriPosition::Below),
            Err(BarcodeError::InvalidCheckDigit {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_ean13_computes_and_verifies() {
        let spec = Ean13Spec::create("400638133393", HriPosition::Below).unwrap();
        assert_eq!(spec.content(), "4006381333931");

        assert!(Ean13Spec::create("4006381333931", HriPosition::Below).is_ok());
        assert_eq!(
            Ean13Spec::create("4006381333935", HriPosition::Below),
            Err(BarcodeError::InvalidCheckDigit {
                expected: 1,
                actual: 5
            })
        );
    }

    #[test]
    fn test_ean8_computes_and_verifies() {
        let spec = Ean8Spec::create("9638507", HriPosition::None).unwrap();
        assert_eq!(spec.content(), "96385074");
        assert!(Ean8Spec::create("96385074", HriPosition::None).is_ok());
    }

    #[test]
    fn test_numeric_rejects_non_digits_with_position() {
        assert_eq!(
            Ean13Spec::create("40063a133393", HriPosition::Below),
            Err(BarcodeError::IllegalCharacter {
                index: 5,
                character: 'a'
            })
        );
    }

    #[test]
    fn test_numeric_rejects_wrong_length() {
        assert_eq!(
            UpcASpec::create("0360002914", HriPosition::Below),
            Err(BarcodeError::IncorrectLength {
                expected: 12,
                actual: 10
            })
        );
        assert_eq!(
            Ean8Spec::create("963850741", HriPosition::Below),
            Err(BarcodeError::IncorrectLength {
                expected: 8,
                actual: 9
            })
        );
    }

    #[test]
    fn test_numeric_rejects_empty() {
        assert_eq!(
            UpcASpec::create("", HriPosition::Below),
            Err(BarcodeError::EmptyContent)
        );
    }

    #[test]
    fn test_spec_converts_to_command() {
        let spec = Ean8Spec::create("9638507", HriPosition::Above).unwrap();
        let command = BarcodeSpec::from(spec).into_command();
        assert_eq!(
            command,
            Command::Ean8 {
                content: "96385074".to_string(),
                hri: HriPosition::Above,
            }
        );
    }
}
