//! 用户数据模型

use std::fmt;

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// 存储中的用户记录，`id` 与存储键始终一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserFields")]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: i64,
}

/// 写操作的请求体
///
/// 请求体中的 `ID` 字段会被忽略，缺失的字段取零值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "UserFields")]
pub struct UserPayload {
    pub name: String,
    pub age: i64,
}

/// 解码时的中间表示
///
/// 字段名不区分大小写，重复字段以最后一次出现为准，`null` 值或整个请求体为
/// `null` 时保留零值。
#[derive(Debug, Default)]
struct UserFields {
    id: String,
    name: String,
    age: i64,
}

impl<'de> Deserialize<'de> for UserFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UserFieldsVisitor)
    }
}

struct UserFieldsVisitor;

impl<'de> Visitor<'de> for UserFieldsVisitor {
    type Value = UserFields;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(UserFields::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut fields = UserFields::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "id" => {
                    if let Some(id) = map.next_value::<Option<String>>()? {
                        fields.id = id;
                    }
                }
                "name" => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        fields.name = name;
                    }
                }
                "age" => {
                    if let Some(age) = map.next_value::<Option<i64>>()? {
                        fields.age = age;
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(fields)
    }
}

impl From<UserFields> for User {
    fn from(fields: UserFields) -> Self {
        Self {
            id: fields.id,
            name: fields.name,
            age: fields.age,
        }
    }
}

impl From<UserFields> for UserPayload {
    fn from(fields: UserFields) -> Self {
        Self {
            name: fields.name,
            age: fields.age,
        }
    }
}

impl UserPayload {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

/// 启动时写入存储的示例用户
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "Mario", 35),
        User::new("2", "Luigi", 32),
        User::new("3", "Toad", 481),
        User::new("4", "Peach", 27),
    ]
}
