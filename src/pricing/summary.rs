use serde::Serialize;

use super::params::PriceBreakdown;

/// 결과 화면용 파생 값. 계산 계약에는 포함되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    /// 세금 금액
    pub tax_amount: f64,
    /// 온라인 판매 수수료 금액
    pub fee_amount: f64,
    /// 판매가 대비 생산원가 비율 [%]
    pub production_cost_share_pct: f64,
    /// 순이익
    pub net_profit: f64,
    /// 판매가 대비 순이익 비율 [%]
    pub net_profit_share_pct: f64,
}

impl PriceSummary {
    pub fn from_breakdown(b: &PriceBreakdown) -> Self {
        let tax_amount = b.final_price * b.tax_pct / 100.0;
        let fee_amount = b.final_price * b.online_sale_fee_pct / 100.0;
        let net_profit = b.final_price - b.production_cost - tax_amount - fee_amount;
        Self {
            tax_amount,
            fee_amount,
            production_cost_share_pct: b.production_cost / b.final_price * 100.0,
            net_profit,
            net_profit_share_pct: net_profit / b.final_price * 100.0,
        }
    }
}

/// "H시간 M분" 표시용 출력 시간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrintTime {
    pub hours: u64,
    pub minutes: u64,
}

impl PrintTime {
    /// 총 출력 시간[h]을 분 단위로 반올림해 나눈다.
    pub fn from_total_hours(total_hours: f64) -> Self {
        let total_minutes = (total_hours.max(0.0) * 60.0).round() as u64;
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}
