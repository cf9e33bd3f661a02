use serde::{Deserialize, Serialize};

/// 가격 계산 입력. 검증을 통과한 값만 담는다고 가정한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingInput {
    /// 부품 이름
    pub name: String,
    /// 부품 무게 [g]
    pub weight_grams: f64,
    /// 재료 단가 [통화/kg]
    pub material_cost_per_kg: f64,
    /// 출력 시간 [h]
    pub hours: f64,
    /// 추가 출력 시간 [min] (0~59)
    pub minutes: f64,
    /// 프린터 구매가 [통화]
    pub printer_value: f64,
    /// 프린터 기대 수명 [h]
    pub printer_lifetime_hours: f64,
    /// 전기 요금 [통화/kWh]
    pub energy_cost_per_kwh: f64,
    /// 목표 이익률 [%]
    pub profit_margin_pct: f64,
    /// 추가 고정비 [통화]
    pub extra_fixed_cost: f64,
    /// 프린터 정격 소비전력 [W]
    pub printer_power_watts: f64,
    /// 유지보수비 (프린터 구매가 대비 %)
    pub maintenance_pct: f64,
    /// 판매가 대비 세율 [%]
    pub tax_pct: f64,
    /// 판매가 대비 온라인 판매 수수료 [%]
    pub online_sale_fee_pct: f64,
    /// 출력 실패율 [%]
    pub failure_rate_pct: f64,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            weight_grams: 200.0,
            material_cost_per_kg: 99.9,
            hours: 7.0,
            minutes: 30.0,
            printer_value: 1630.0,
            printer_lifetime_hours: 5000.0,
            energy_cost_per_kwh: 0.9,
            profit_margin_pct: 50.0,
            extra_fixed_cost: 0.0,
            printer_power_watts: 400.0,
            maintenance_pct: 25.0,
            tax_pct: 8.0,
            online_sale_fee_pct: 20.0,
            failure_rate_pct: 15.0,
        }
    }
}

impl PricingInput {
    /// 세금 + 수수료 + 이익률 합계 [%]. 100 이상이면 마크업이 발산한다.
    pub fn combined_rate_pct(&self) -> f64 {
        self.tax_pct + self.online_sale_fee_pct + self.profit_margin_pct
    }
}

/// 가격 계산 결과 내역.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub name: String,
    /// 생산원가 → 최종 판매가 배수
    pub markup: f64,
    pub material_cost: f64,
    pub depreciation_cost: f64,
    pub electricity_cost: f64,
    pub extra_fixed_cost: f64,
    /// 유지보수비 [통화]
    pub maintenance_value: f64,
    /// 시간당 감가상각비 (유지보수비 포함) [통화/h]
    pub depreciation_per_hour: f64,
    pub total_hours: f64,
    /// 전력 소비량 [kWh]
    pub energy_consumed_kwh: f64,
    /// 실패율 보정 계수 (1 + 실패율)
    pub failure_factor: f64,
    /// 실패율 반영 후, 이익/세금/수수료 반영 전 원가
    pub production_cost: f64,
    pub price_with_margin: f64,
    pub final_price: f64,
    pub failure_rate_pct: f64,
    pub tax_pct: f64,
    pub online_sale_fee_pct: f64,
    pub profit_margin_pct: f64,
}
