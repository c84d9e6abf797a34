use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use serde::de::{self, Deserializer, Visitor};
use serde::{ser::Error as _, Deserialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 金额保留两位小数 (四舍五入，远离零)
pub fn round_money(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

/// 金额按 JSON 数字输出
pub fn serialize_money<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    match round_money(value).to_f64() {
        Some(v) => serializer.serialize_f64(v),
        None => Err(S::Error::custom(format!("amount {} is not representable", value))),
    }
}

/// 按数字的十进制文本解析金额
///
/// JSON 小数到这里已是 f64，取其最短十进制表示 (1.015 -> "1.015")，
/// 不使用二进制精确展开。
pub fn deserialize_money<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    deserializer.deserialize_any(MoneyVisitor)
}

pub fn deserialize_optional_money<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BigDecimal>, D::Error> {
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_money")] BigDecimal);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(v)| v))
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = BigDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<BigDecimal, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("amount {} is not finite", v)));
        }
        BigDecimal::from_str(&v.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigDecimal, E> {
        BigDecimal::from_str(v.trim()).map_err(E::custom)
    }
}
