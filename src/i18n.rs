use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const PROMPT_YES_NO: &str = "general.prompt_yes_no";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EDIT_FORM: &str = "main_menu.edit_form";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_RESET: &str = "main_menu.reset";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FORM_HEADING: &str = "form.heading";
    pub const FORM_KEEP_HINT: &str = "form.keep_hint";
    pub const SECTION_PART: &str = "form.section_part";
    pub const SECTION_ENERGY: &str = "form.section_energy";
    pub const SECTION_PRINTER: &str = "form.section_printer";
    pub const SECTION_PRICING: &str = "form.section_pricing";

    pub const FIELD_NAME: &str = "field.name";
    pub const FIELD_WEIGHT: &str = "field.weight_grams";
    pub const FIELD_HOURS: &str = "field.hours";
    pub const FIELD_MINUTES: &str = "field.minutes";
    pub const FIELD_MATERIAL_COST: &str = "field.material_cost_per_kg";
    pub const FIELD_POWER: &str = "field.printer_power_watts";
    pub const FIELD_ENERGY_COST: &str = "field.energy_cost_per_kwh";
    pub const FIELD_PRINTER_VALUE: &str = "field.printer_value";
    pub const FIELD_LIFETIME: &str = "field.printer_lifetime_hours";
    pub const FIELD_MAINTENANCE: &str = "field.maintenance_pct";
    pub const FIELD_FAILURE_RATE: &str = "field.failure_rate_pct";
    pub const FIELD_TAX: &str = "field.tax_pct";
    pub const FIELD_ONLINE_FEE: &str = "field.online_sale_fee_pct";
    pub const FIELD_MARGIN: &str = "field.profit_margin_pct";
    pub const FIELD_EXTRA_FIXED: &str = "field.extra_fixed_cost";

    pub const PREVIEW_HEADING: &str = "preview.heading";
    pub const PREVIEW_CONSUMPTION: &str = "preview.consumption";
    pub const PREVIEW_MAINTENANCE: &str = "preview.maintenance";
    pub const PREVIEW_DEPRECIATION: &str = "preview.depreciation";
    pub const PREVIEW_UNAVAILABLE: &str = "preview.unavailable";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_PART: &str = "result.part";
    pub const RESULT_TAXES: &str = "result.taxes";
    pub const RESULT_ONLINE_FEE: &str = "result.online_fee";
    pub const RESULT_PRODUCTION_COST: &str = "result.production_cost";
    pub const RESULT_PRINT_TIME: &str = "result.print_time";
    pub const RESULT_PRINT_TIME_VALUE: &str = "result.print_time_value";
    pub const RESULT_MARKUP: &str = "result.markup";
    pub const RESULT_NET_PROFIT: &str = "result.net_profit";
    pub const RESULT_FINAL_PRICE: &str = "result.final_price";
    pub const RESULT_FINAL_PRICE_NOTE: &str = "result.final_price_note";
    pub const RESULT_OF_PRICE: &str = "result.of_price";
    pub const RESULT_DETAILS_HEADING: &str = "result.details_heading";
    pub const RESULT_MATERIAL_COST: &str = "result.material_cost";
    pub const RESULT_DEPRECIATION_COST: &str = "result.depreciation_cost";
    pub const RESULT_ELECTRICITY_COST: &str = "result.electricity_cost";
    pub const RESULT_EXTRA_FIXED: &str = "result.extra_fixed";
    pub const RESULT_FAILURE_FACTOR: &str = "result.failure_factor";
    pub const RESULT_PRICE_WITH_MARGIN: &str = "result.price_with_margin";

    pub const ERROR_VALIDATION_HEADING: &str = "error.validation_heading";
    pub const ERROR_REQUIRED: &str = "error.required";
    pub const ERROR_NOT_A_NUMBER: &str = "error.not_a_number";
    pub const ERROR_BELOW_MIN: &str = "error.below_min";
    pub const ERROR_ABOVE_MAX: &str = "error.above_max";
    pub const ERROR_COMBINED_RATES: &str = "error.combined_rates";

    pub const RESET_CONFIRM: &str = "reset.confirm";
    pub const RESET_DONE: &str = "reset.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_DEFAULTS_SAVED: &str = "settings.defaults_saved";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Pt,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("pt") {
            Language::Pt
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/pt-br)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "language pack override loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 번역이 없으면 영어, 그다음 한국어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::Pt => pt(key).or_else(|| en(key)).unwrap_or_else(|| ko(key)),
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.t(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "pt" | "pt-br" | "pt-pt" => Some("pt-br".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("pt") => Some("pt-br".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "pt" => Some("pt-br".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        PROMPT_YES_NO => "(y/N): ",
        MAIN_MENU_TITLE => "\n=== 3D 프린팅 가격 계산기 ===",
        MAIN_MENU_EDIT_FORM => "1) 부품 정보 입력",
        MAIN_MENU_CALCULATE => "2) 판매가 계산",
        MAIN_MENU_RESET => "3) 입력 초기화",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        FORM_HEADING => "\n-- 부품 정보 입력 --",
        FORM_KEEP_HINT => "엔터를 누르면 현재 값을 유지합니다.",
        SECTION_PART => "[부품 정보]",
        SECTION_ENERGY => "[에너지와 재료]",
        SECTION_PRINTER => "[프린터 정보]",
        SECTION_PRICING => "[가격과 수수료]",
        FIELD_NAME => "부품 이름",
        FIELD_WEIGHT => "부품 무게 (g)",
        FIELD_HOURS => "출력 시간 (h)",
        FIELD_MINUTES => "추가 분 (min)",
        FIELD_MATERIAL_COST => "재료 kg당 가격",
        FIELD_POWER => "프린터 소비전력 (W)",
        FIELD_ENERGY_COST => "전기 요금 (/kWh)",
        FIELD_PRINTER_VALUE => "프린터 구매가",
        FIELD_LIFETIME => "예상 수명 (h)",
        FIELD_MAINTENANCE => "유지보수비 (%, 구매가 기준)",
        FIELD_FAILURE_RATE => "실패율 (%)",
        FIELD_TAX => "세금 (%)",
        FIELD_ONLINE_FEE => "온라인 판매 수수료 (%)",
        FIELD_MARGIN => "이익률 (%)",
        FIELD_EXTRA_FIXED => "추가 고정비",
        PREVIEW_HEADING => "-- 미리보기 --",
        PREVIEW_CONSUMPTION => "전력 소비량:",
        PREVIEW_MAINTENANCE => "유지보수비:",
        PREVIEW_DEPRECIATION => "시간당 감가상각:",
        PREVIEW_UNAVAILABLE => "-",
        RESULT_HEADING => "\n-- 결과 --",
        RESULT_PART => "부품:",
        RESULT_TAXES => "세금:",
        RESULT_ONLINE_FEE => "온라인 판매 수수료:",
        RESULT_PRODUCTION_COST => "생산원가:",
        RESULT_PRINT_TIME => "총 출력 시간:",
        RESULT_PRINT_TIME_VALUE => "{hours}시간 {minutes}분",
        RESULT_MARKUP => "마크업 배수:",
        RESULT_NET_PROFIT => "순이익:",
        RESULT_FINAL_PRICE => "판매가:",
        RESULT_FINAL_PRICE_NOTE => "원가, 세금, 수수료, 이익을 모두 반영한 권장 판매가",
        RESULT_OF_PRICE => "판매가 대비",
        RESULT_DETAILS_HEADING => "-- 원가 내역 --",
        RESULT_MATERIAL_COST => "재료비:",
        RESULT_DEPRECIATION_COST => "감가상각비:",
        RESULT_ELECTRICITY_COST => "전기료:",
        RESULT_EXTRA_FIXED => "추가 고정비:",
        RESULT_FAILURE_FACTOR => "실패율 계수:",
        RESULT_PRICE_WITH_MARGIN => "이익 포함 가격:",
        ERROR_VALIDATION_HEADING => "입력값을 확인하세요:",
        ERROR_REQUIRED => "필수 입력입니다",
        ERROR_NOT_A_NUMBER => "숫자가 아닙니다",
        ERROR_BELOW_MIN => "최소값은 {min}입니다",
        ERROR_ABOVE_MAX => "최대값은 {max}입니다",
        ERROR_COMBINED_RATES => "세금, 수수료, 이익률의 합이 100% 미만이어야 합니다 (현재 {combined}%)",
        RESET_CONFIRM => "입력을 기본값으로 초기화할까요? ",
        RESET_DONE => "입력이 초기화되었습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 언어 / 통화 기호:",
        SETTINGS_OPTIONS => "1) 언어  2) 통화 기호  3) 현재 입력을 기본값으로 저장",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en/pt-br): ",
        SETTINGS_PROMPT_CURRENCY => "통화 기호: ",
        SETTINGS_DEFAULTS_SAVED => "현재 입력을 기본값으로 저장했습니다.",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        PROMPT_YES_NO => "(y/N): ",
        MAIN_MENU_TITLE => "\n=== 3D Printing Price Calculator ===",
        MAIN_MENU_EDIT_FORM => "1) Enter part data",
        MAIN_MENU_CALCULATE => "2) Calculate price",
        MAIN_MENU_RESET => "3) Reset form",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        FORM_HEADING => "\n-- Part Data --",
        FORM_KEEP_HINT => "Press enter to keep the current value.",
        SECTION_PART => "[Part]",
        SECTION_ENERGY => "[Energy and material]",
        SECTION_PRINTER => "[Printer]",
        SECTION_PRICING => "[Pricing and fees]",
        FIELD_NAME => "Part name",
        FIELD_WEIGHT => "Part weight (g)",
        FIELD_HOURS => "Print hours",
        FIELD_MINUTES => "Extra minutes",
        FIELD_MATERIAL_COST => "Material cost per kg",
        FIELD_POWER => "Printer power (W)",
        FIELD_ENERGY_COST => "Energy cost (/kWh)",
        FIELD_PRINTER_VALUE => "Printer price",
        FIELD_LIFETIME => "Expected lifetime (h)",
        FIELD_MAINTENANCE => "Maintenance (% of printer price)",
        FIELD_FAILURE_RATE => "Failure rate (%)",
        FIELD_TAX => "Tax (%)",
        FIELD_ONLINE_FEE => "Online sale fee (%)",
        FIELD_MARGIN => "Profit margin (%)",
        FIELD_EXTRA_FIXED => "Extra fixed cost",
        PREVIEW_HEADING => "-- Preview --",
        PREVIEW_CONSUMPTION => "Consumption:",
        PREVIEW_MAINTENANCE => "Maintenance cost:",
        PREVIEW_DEPRECIATION => "Depreciation per hour:",
        PREVIEW_UNAVAILABLE => "-",
        RESULT_HEADING => "\n-- Results --",
        RESULT_PART => "Part:",
        RESULT_TAXES => "Taxes:",
        RESULT_ONLINE_FEE => "Online sale fee:",
        RESULT_PRODUCTION_COST => "Production cost:",
        RESULT_PRINT_TIME => "Total print time:",
        RESULT_PRINT_TIME_VALUE => "{hours} hours and {minutes} minutes",
        RESULT_MARKUP => "Markup multiplier:",
        RESULT_NET_PROFIT => "Net profit:",
        RESULT_FINAL_PRICE => "Sale price:",
        RESULT_FINAL_PRICE_NOTE => "Suggested price covering costs, taxes, fees and profit",
        RESULT_OF_PRICE => "of price",
        RESULT_DETAILS_HEADING => "-- Cost details --",
        RESULT_MATERIAL_COST => "Material:",
        RESULT_DEPRECIATION_COST => "Depreciation:",
        RESULT_ELECTRICITY_COST => "Electricity:",
        RESULT_EXTRA_FIXED => "Extra fixed cost:",
        RESULT_FAILURE_FACTOR => "Failure factor:",
        RESULT_PRICE_WITH_MARGIN => "Price with margin:",
        ERROR_VALIDATION_HEADING => "Please check the inputs:",
        ERROR_REQUIRED => "required",
        ERROR_NOT_A_NUMBER => "not a number",
        ERROR_BELOW_MIN => "minimum is {min}",
        ERROR_ABOVE_MAX => "maximum is {max}",
        ERROR_COMBINED_RATES => {
            "combined tax, fee, and margin percentages must sum to less than 100 (now {combined}%)"
        }
        RESET_CONFIRM => "Reset the form to defaults? ",
        RESET_DONE => "Form reset.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current language / currency symbol:",
        SETTINGS_OPTIONS => "1) Language  2) Currency symbol  3) Save current form as defaults",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en/pt-br): ",
        SETTINGS_PROMPT_CURRENCY => "Currency symbol: ",
        SETTINGS_DEFAULTS_SAVED => "Current form saved as defaults.",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings updated.",
        _ => return None,
    })
}

fn pt(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando.",
        PROMPT_YES_NO => "(s/N): ",
        MAIN_MENU_TITLE => "\n=== Calculadora de Impressão 3D ===",
        MAIN_MENU_EDIT_FORM => "1) Informar dados da peça",
        MAIN_MENU_CALCULATE => "2) Calcular custo",
        MAIN_MENU_RESET => "3) Limpar",
        MAIN_MENU_SETTINGS => "4) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Opção: ",
        INVALID_SELECTION_RETRY => "Opção inválida. Tente novamente.",
        FORM_HEADING => "\n-- Informações sobre a peça --",
        FORM_KEEP_HINT => "Pressione enter para manter o valor atual.",
        SECTION_PART => "[Informações sobre a peça]",
        SECTION_ENERGY => "[Energia e materiais gastos]",
        SECTION_PRINTER => "[Informações sobre a impressora]",
        SECTION_PRICING => "[Informações sobre a precificação e taxas]",
        FIELD_NAME => "Nome da peça",
        FIELD_WEIGHT => "Peso da peça (g)",
        FIELD_HOURS => "Horas de impressão",
        FIELD_MINUTES => "Minutos",
        FIELD_MATERIAL_COST => "Custo por Kg do material",
        FIELD_POWER => "Potência da impressora (W)",
        FIELD_ENERGY_COST => "Custo da energia elétrica (/kWh)",
        FIELD_PRINTER_VALUE => "Valor da impressora",
        FIELD_LIFETIME => "Vida útil estimada (horas)",
        FIELD_MAINTENANCE => "Custo de manutenção (%)",
        FIELD_FAILURE_RATE => "% de falhas",
        FIELD_TAX => "Imposto (%)",
        FIELD_ONLINE_FEE => "Taxa de venda online (%)",
        FIELD_MARGIN => "Margem de lucro (%)",
        FIELD_EXTRA_FIXED => "Custo fixo adicional",
        PREVIEW_HEADING => "-- Prévia --",
        PREVIEW_CONSUMPTION => "Consumo:",
        PREVIEW_MAINTENANCE => "Custo de manutenção:",
        PREVIEW_DEPRECIATION => "Depreciação da impressora (/h):",
        RESULT_HEADING => "\n-- Resultados --",
        RESULT_PART => "Peça:",
        RESULT_TAXES => "Impostos:",
        RESULT_ONLINE_FEE => "Taxa de venda online:",
        RESULT_PRODUCTION_COST => "Custo de produção:",
        RESULT_PRINT_TIME => "Tempo total de impressão:",
        RESULT_PRINT_TIME_VALUE => "{hours} horas e {minutes} minutos",
        RESULT_MARKUP => "Mark Up multiplicador:",
        RESULT_NET_PROFIT => "Lucro Líquido:",
        RESULT_FINAL_PRICE => "Preço para venda:",
        RESULT_FINAL_PRICE_NOTE => "Valor sugerido para venda considerando custos, taxas e lucro",
        RESULT_OF_PRICE => "do preço",
        RESULT_DETAILS_HEADING => "-- Detalhamento --",
        RESULT_MATERIAL_COST => "Material:",
        RESULT_DEPRECIATION_COST => "Depreciação:",
        RESULT_ELECTRICITY_COST => "Eletricidade:",
        RESULT_EXTRA_FIXED => "Custo fixo adicional:",
        RESULT_FAILURE_FACTOR => "Fator de falhas:",
        RESULT_PRICE_WITH_MARGIN => "Preço com lucro:",
        ERROR_VALIDATION_HEADING => "Verifique os campos:",
        ERROR_REQUIRED => "campo obrigatório",
        ERROR_NOT_A_NUMBER => "valor inválido",
        ERROR_BELOW_MIN => "mínimo {min}",
        ERROR_ABOVE_MAX => "máx. {max}",
        ERROR_COMBINED_RATES => {
            "a soma de imposto, taxa e margem deve ser menor que 100% (atual {combined}%)"
        }
        RESET_CONFIRM => "Limpar o formulário? ",
        RESET_DONE => "Formulário limpo.",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT => "Idioma / símbolo da moeda:",
        SETTINGS_OPTIONS => "1) Idioma  2) Símbolo da moeda  3) Salvar formulário como padrão",
        SETTINGS_PROMPT_LANGUAGE => "Código do idioma (auto/ko/en/pt-br): ",
        SETTINGS_PROMPT_CURRENCY => "Símbolo da moeda: ",
        SETTINGS_DEFAULTS_SAVED => "Formulário salvo como padrão.",
        SETTINGS_INVALID => "Entrada inválida; nada foi alterado.",
        SETTINGS_SAVED => "Configurações atualizadas.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_falls_back_to_english() {
        let tr = Translator::new("pt-br");
        assert_eq!(tr.t(keys::PREVIEW_UNAVAILABLE), "-");
    }

    #[test]
    fn unknown_key_is_marked() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn locale_strings_normalize() {
        assert_eq!(normalize_locale_string("pt_BR.UTF-8").as_deref(), Some("pt-br"));
        assert_eq!(normalize_locale_string("fr_FR"), None);
        assert_eq!(normalize_lang("EN-UK").as_deref(), Some("en-us"));
        assert_eq!(normalize_lang("auto"), None);
    }
}
