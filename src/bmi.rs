use std::fmt;

/// 校验失败原因
///
/// 每个变体对应一种用户可自行修正的输入错误，
/// 携带弹窗显示用的标题/消息以及出错的输入框标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReason {
    BothMissing,
    WeightMissing,
    HeightMissing,
    NotANumber,
    BothZero,
    WeightZero,
    HeightZero,
}

impl ErrorReason {
    pub fn title(&self) -> &'static str {
        "Error"
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorReason::BothMissing => "Please enter both weight and height.",
            ErrorReason::WeightMissing => "Please enter your weight.",
            ErrorReason::HeightMissing => "Please enter your height.",
            ErrorReason::NotANumber => "Weight and height must be numbers.",
            ErrorReason::BothZero => "Both weight and height cannot be zero.",
            ErrorReason::WeightZero => "Weight cannot be zero.",
            ErrorReason::HeightZero => "Height cannot be zero.",
        }
    }

    /// 出错的输入框标记 (weight, height)，用于高亮显示
    pub fn field_flags(&self) -> (bool, bool) {
        match self {
            ErrorReason::BothMissing | ErrorReason::BothZero | ErrorReason::NotANumber => {
                (true, true)
            }
            ErrorReason::WeightMissing | ErrorReason::WeightZero => (true, false),
            ErrorReason::HeightMissing | ErrorReason::HeightZero => (false, true),
        }
    }
}

/// 校验通过的输入，体重 (kg) 和身高 (m) 均严格大于零
///
/// 只能通过 [`validate`] 构造，计算器由此保证永不除零
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInput {
    pub weight: f64,
    pub height: f64,
}

/// BMI 分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    ObeseClassI,
    ObeseClassII,
    ObeseClassIII,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClassI => "Obese Class I",
            BmiCategory::ObeseClassII => "Obese Class II",
            BmiCategory::ObeseClassIII => "Obese Class III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 计算结果，value 已舍入到两位小数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// 显示格式，如 "22.86 kg/m²"
    pub fn formatted(&self) -> String {
        format!("{:.2} kg/m²", self.value)
    }
}

/// 解析单个测量值：仅接受有限的非负十进制数
fn parse_measurement(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// 校验两个原始文本输入
///
/// 检查顺序固定：先空值，再数字解析，最后零值
pub fn validate(weight_text: &str, height_text: &str) -> Result<ValidInput, ErrorReason> {
    if weight_text.is_empty() && height_text.is_empty() {
        return Err(ErrorReason::BothMissing);
    }
    if weight_text.is_empty() {
        return Err(ErrorReason::WeightMissing);
    }
    if height_text.is_empty() {
        return Err(ErrorReason::HeightMissing);
    }

    let weight = parse_measurement(weight_text).ok_or(ErrorReason::NotANumber)?;
    let height = parse_measurement(height_text).ok_or(ErrorReason::NotANumber)?;

    if weight == 0.0 && height == 0.0 {
        return Err(ErrorReason::BothZero);
    }
    if weight == 0.0 {
        return Err(ErrorReason::WeightZero);
    }
    if height == 0.0 {
        return Err(ErrorReason::HeightZero);
    }

    Ok(ValidInput { weight, height })
}

/// 分类区间上界表，按升序排列，首个命中区间生效
///
/// 所有阈值在二进制浮点下均可精确表示，严格小于比较不会误分类
const CATEGORY_BOUNDS: [(f64, BmiCategory); 5] = [
    (18.5, BmiCategory::Underweight),
    (25.0, BmiCategory::NormalWeight),
    (30.0, BmiCategory::Overweight),
    (35.0, BmiCategory::ObeseClassI),
    (40.0, BmiCategory::ObeseClassII),
];

/// BMI 值映射到分类，在 [0, ∞) 上全覆盖
pub fn classify(bmi: f64) -> BmiCategory {
    for (upper, category) in CATEGORY_BOUNDS {
        if bmi < upper {
            return category;
        }
    }
    BmiCategory::ObeseClassIII
}

/// 计算 BMI 并分类
///
/// 先舍入到两位小数再分类，与显示值保持一致
pub fn evaluate(input: ValidInput) -> BmiResult {
    let bmi = input.weight / (input.height * input.height);
    let value = (bmi * 100.0).round() / 100.0;
    BmiResult {
        value,
        category: classify(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing() {
        assert_eq!(validate("", ""), Err(ErrorReason::BothMissing));
        assert_eq!(validate("70", ""), Err(ErrorReason::HeightMissing));
        assert_eq!(validate("", "1.75"), Err(ErrorReason::WeightMissing));
    }

    #[test]
    fn test_validate_not_a_number() {
        assert_eq!(validate("abc", "1.75"), Err(ErrorReason::NotANumber));
        assert_eq!(validate("70", "1.2.3"), Err(ErrorReason::NotANumber));
        assert_eq!(validate("inf", "1.75"), Err(ErrorReason::NotANumber));
        assert_eq!(validate("-70", "1.75"), Err(ErrorReason::NotANumber));
    }

    #[test]
    fn test_validate_zero() {
        assert_eq!(validate("0", "0"), Err(ErrorReason::BothZero));
        assert_eq!(validate("0", "1.75"), Err(ErrorReason::WeightZero));
        assert_eq!(validate("70", "0"), Err(ErrorReason::HeightZero));
        assert_eq!(validate("0.0", "1.75"), Err(ErrorReason::WeightZero));
    }

    #[test]
    fn test_validate_check_order() {
        // 空值检查先于数字解析
        assert_eq!(validate("abc", ""), Err(ErrorReason::HeightMissing));
        // 数字解析先于零值检查
        assert_eq!(validate("0", "abc"), Err(ErrorReason::NotANumber));
    }

    #[test]
    fn test_validate_ok() {
        let input = validate("70", "1.75").unwrap();
        assert_eq!(input.weight, 70.0);
        assert_eq!(input.height, 1.75);
    }

    #[test]
    fn test_evaluate_normal_weight() {
        let result = evaluate(ValidInput {
            weight: 70.0,
            height: 1.75,
        });
        assert_eq!(result.formatted(), "22.86 kg/m²");
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_evaluate_obese_class_ii() {
        let result = evaluate(ValidInput {
            weight: 120.0,
            height: 1.80,
        });
        assert_eq!(result.value, 37.04);
        assert_eq!(result.category, BmiCategory::ObeseClassII);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0), BmiCategory::Underweight);
        assert_eq!(classify(18.49), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::NormalWeight);
        assert_eq!(classify(24.9), BmiCategory::NormalWeight);
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(classify(29.9), BmiCategory::Overweight);
        assert_eq!(classify(30.0), BmiCategory::ObeseClassI);
        assert_eq!(classify(34.9), BmiCategory::ObeseClassI);
        assert_eq!(classify(35.0), BmiCategory::ObeseClassII);
        assert_eq!(classify(39.9), BmiCategory::ObeseClassII);
        assert_eq!(classify(40.0), BmiCategory::ObeseClassIII);
        assert_eq!(classify(100.0), BmiCategory::ObeseClassIII);
    }

    #[test]
    fn test_classify_covers_gaps() {
        // 常见 BMI 表在 24.9 和 25.0 之间留有间隙，上界表按首个命中区间归类
        assert_eq!(classify(24.95), BmiCategory::NormalWeight);
        assert_eq!(classify(29.95), BmiCategory::Overweight);
        assert_eq!(classify(39.95), BmiCategory::ObeseClassII);
    }

    #[test]
    fn test_field_flags() {
        assert_eq!(ErrorReason::BothMissing.field_flags(), (true, true));
        assert_eq!(ErrorReason::WeightMissing.field_flags(), (true, false));
        assert_eq!(ErrorReason::HeightZero.field_flags(), (false, true));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal Weight");
        assert_eq!(BmiCategory::ObeseClassIII.to_string(), "Obese Class III");
    }
}
