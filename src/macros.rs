//! 宏集合：字面量形式构造 `FieldMap` / `ColumnAliases`，以及列名列表的统一入参。

/// 按书写顺序构造 [`FieldMap`](crate::FieldMap)。
///
/// ```ignore
/// let fields = field_map! { "firstName" => "Boris", "lastName" => "Biden" };
/// ```
#[macro_export]
macro_rules! field_map {
    () => {
        $crate::FieldMap::new()
    };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::FieldMap::new();
        $(
            map.insert($field, $value);
        )+
        map
    }};
}

/// 构造 [`ColumnAliases`](crate::ColumnAliases)。
#[macro_export]
macro_rules! column_aliases {
    () => {
        $crate::ColumnAliases::new()
    };
    ($($field:expr => $column:expr),+ $(,)?) => {{
        let mut aliases = $crate::ColumnAliases::new();
        $(
            aliases.insert($field, $column);
        )+
        aliases
    }};
}

pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl<const N: usize, T> IntoStrings for [T; N]
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T> IntoStrings for &[T]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.iter().cloned().map(Into::into));
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

pub(crate) fn collect_into_strings<T>(value: T) -> Vec<String>
where
    T: IntoStrings,
{
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst
}
