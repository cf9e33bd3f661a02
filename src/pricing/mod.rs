//! 3D 출력물 가격 계산 모듈 모음.

pub mod calculator;
pub mod params;
pub mod preview;
pub mod summary;
pub mod validation;

pub use calculator::*;
pub use params::{PriceBreakdown, PricingInput};
pub use preview::LivePreview;
pub use summary::{PriceSummary, PrintTime};
pub use validation::{validate_form, validate_input, Field, PricingForm, ValidationErrors};

/// 견적 파이프라인 오류.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// 입력 검증 실패
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationErrors),
    /// 세금 + 수수료 + 이익률 합계가 100% 이상이라 판매가가 정의되지 않음
    #[error("combined tax, fee, and margin percentages must sum to less than 100 (got {combined_pct})")]
    DegenerateMarkup { combined_pct: f64 },
}

/// 계산 후 마크업/판매가가 유한한 양수인지 확인한다.
pub fn quote(input: &PricingInput) -> Result<PriceBreakdown, PricingError> {
    let breakdown = compute_price(input);
    let degenerate = !breakdown.markup.is_finite()
        || breakdown.markup < 0.0
        || !breakdown.final_price.is_finite()
        || breakdown.final_price < 0.0;
    if degenerate {
        let combined_pct = input.combined_rate_pct();
        tracing::warn!(combined_pct, markup = breakdown.markup, "degenerate markup");
        return Err(PricingError::DegenerateMarkup { combined_pct });
    }
    tracing::info!(
        part = %breakdown.name,
        final_price = breakdown.final_price,
        "quote computed"
    );
    Ok(breakdown)
}

/// 폼 검증부터 견적까지 한 번에 수행한다.
pub fn quote_form(form: &PricingForm) -> Result<PriceBreakdown, PricingError> {
    let input = validate_form(form)?;
    quote(&input)
}
