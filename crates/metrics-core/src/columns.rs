//! Static table-column metadata for the dashboard.
//!
//! Columns are pure configuration with no lifecycle: the built-in catalog in
//! [`dashboard_columns`] mirrors what the frontend renders, and a deployment
//! can override it with a YAML file via [`ColumnCatalog::from_file`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for column catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading a catalog file
    #[error("Failed to read column catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse column catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Which side a column is pinned to while the table scrolls horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

/// Metadata for one table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Header text shown to the user
    pub title: String,

    /// Record field the column reads
    pub data_index: String,

    /// Stable column key (defaults to `data_index`)
    pub key: String,

    /// Column width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,

    /// Pin side, if the column stays visible while scrolling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,

    /// Whether the table offers sorting on this column
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sorter: bool,

    /// Business-type tag consumed by the frontend's cell renderers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_type: Option<u32>,
}

impl ColumnDescriptor {
    /// Create a column with `key` defaulted to the data index.
    pub fn new(title: impl Into<String>, data_index: impl Into<String>) -> Self {
        let data_index = data_index.into();
        Self {
            title: title.into(),
            key: data_index.clone(),
            data_index,
            width: None,
            fixed: None,
            sorter: false,
            biz_type: None,
        }
    }

    /// Set the column width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Pin the column to one side.
    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Mark the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sorter = true;
        self
    }

    /// Attach a business-type tag.
    pub fn biz_type(mut self, tag: u32) -> Self {
        self.biz_type = Some(tag);
        self
    }
}

/// An ordered set of column descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnCatalog {
    /// Columns in display order
    pub columns: Vec<ColumnDescriptor>,
}

impl ColumnCatalog {
    /// Load a catalog from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Look up a column by its data index.
    pub fn get(&self, data_index: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.data_index == data_index)
    }
}

impl Default for ColumnCatalog {
    fn default() -> Self {
        Self {
            columns: dashboard_columns(),
        }
    }
}

/// The built-in column set for the store performance dashboard.
pub fn dashboard_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("门店编码", "storeCode")
            .width(100)
            .fixed(FixedSide::Left),
        ColumnDescriptor::new("门店名称", "storeName")
            .width(220)
            .fixed(FixedSide::Left),
        ColumnDescriptor::new("区域", "area").width(80).fixed(FixedSide::Left),
        ColumnDescriptor::new("报表日期", "reportDate").width(120).sortable(),
        ColumnDescriptor::new("总分", "totalScore")
            .width(90)
            .fixed(FixedSide::Left)
            .sortable(),
        ColumnDescriptor::new("月累计取消率", "monthlyCanceledRate")
            .width(130)
            .sortable()
            .biz_type(1),
        ColumnDescriptor::new("当日取消率", "dailyCanceledRate")
            .width(130)
            .sortable()
            .biz_type(1),
        ColumnDescriptor::new("月差评数", "monthlyBadReviews").width(110).sortable(),
        ColumnDescriptor::new("月差评率", "monthlyBadReviewRate")
            .width(120)
            .sortable()
            .biz_type(1),
        ColumnDescriptor::new("美团评分", "dailyMeituanRating").width(110).sortable(),
        ColumnDescriptor::new("饿了么评分", "dailyElemeRating").width(110).sortable(),
        ColumnDescriptor::new("有效回复", "effectReply").width(100).biz_type(2),
        ColumnDescriptor::new("月平均有货率", "monthlyAvgStockRate")
            .width(130)
            .sortable()
            .biz_type(1),
        ColumnDescriptor::new("当日库存可用率", "dailyStockAvailability")
            .width(140)
            .sortable()
            .biz_type(1),
        ColumnDescriptor::new("效期管理", "expiryManagement").width(100).biz_type(2),
        ColumnDescriptor::new("培训完成", "trainingCompleted").width(100).biz_type(2),
        ColumnDescriptor::new("百单人效", "monthlyManhourPer100Orders")
            .width(120)
            .sortable(),
        ColumnDescriptor::new("月累计亏损额", "monthlyTotalLoss").width(130).sortable(),
        ColumnDescriptor::new("总加权扣分", "totalWeightingPenalty")
            .width(120)
            .sortable(),
        ColumnDescriptor::new("加权前总分", "totalScoreWithoutWeightingPenalty")
            .width(120)
            .fixed(FixedSide::Right)
            .sortable(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_defaults_to_data_index() {
        let col = ColumnDescriptor::new("总分", "totalScore");
        assert_eq!(col.key, "totalScore");
        assert_eq!(col.data_index, "totalScore");
        assert!(!col.sorter);
        assert!(col.width.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let col = ColumnDescriptor::new("月累计取消率", "monthlyCanceledRate")
            .width(130)
            .fixed(FixedSide::Left)
            .sortable()
            .biz_type(1);
        assert_eq!(col.width, Some(130));
        assert_eq!(col.fixed, Some(FixedSide::Left));
        assert!(col.sorter);
        assert_eq!(col.biz_type, Some(1));
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = ColumnCatalog::default();
        assert!(!catalog.columns.is_empty());

        // Identity columns are pinned left
        let store = catalog.get("storeName").expect("storeName column");
        assert_eq!(store.fixed, Some(FixedSide::Left));

        // The aggregate column is pinned right
        let aggregate = catalog
            .get("totalScoreWithoutWeightingPenalty")
            .expect("aggregate column");
        assert_eq!(aggregate.fixed, Some(FixedSide::Right));

        // No duplicate keys
        let mut keys: Vec<&str> = catalog.columns.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog.columns.len());
    }

    #[test]
    fn test_serde_field_names() {
        let col = ColumnDescriptor::new("总分", "totalScore")
            .width(90)
            .fixed(FixedSide::Left)
            .sortable();
        let json = serde_json::to_value(&col).unwrap();

        assert_eq!(json["dataIndex"], "totalScore");
        assert_eq!(json["fixed"], "left");
        assert_eq!(json["sorter"], true);
        // Unset options are omitted
        assert!(json.get("bizType").is_none());
    }

    #[test]
    fn test_catalog_from_yaml() {
        let yaml = r#"
columns:
  - title: 门店名称
    dataIndex: storeName
    key: storeName
    width: 220
    fixed: left
  - title: 总分
    dataIndex: totalScore
    key: totalScore
    sorter: true
"#;
        let catalog = ColumnCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.columns.len(), 2);
        assert_eq!(catalog.columns[0].width, Some(220));
        assert_eq!(catalog.columns[0].fixed, Some(FixedSide::Left));
        assert!(catalog.columns[1].sorter);
        assert!(catalog.columns[1].fixed.is_none());
    }

    #[test]
    fn test_catalog_from_yaml_rejects_garbage() {
        let result = ColumnCatalog::from_yaml("columns: not-a-list");
        assert!(matches!(result, Err(CatalogError::Yaml(_))));
    }
}
