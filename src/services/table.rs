//! 问题列表表格：排序、列筛选与分页
//!
//! 表格总是作用于搜索过滤之后的结果，不直接修改存储。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{Category, Question, Status};
use crate::services::filter::{self, ColumnFilters};
use crate::utils::parse_timestamp;

/// 可排序的列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Title,
    Difficulty,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}

fn compare(key: SortKey, a: &Question, b: &Question) -> Ordering {
    match key {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Difficulty => a.difficulty.cmp(&b.difficulty),
        // 无法解析的时间排在最前
        SortKey::CreatedAt => parse_timestamp(&a.created_at).cmp(&parse_timestamp(&b.created_at)),
    }
}

/// 单列排序，降序结果恰好是升序结果的逆序
pub fn sort_rows(rows: &mut [Question], spec: SortSpec) {
    rows.sort_by(|a, b| compare(spec.key, a, b));
    if spec.order == SortOrder::Descending {
        rows.reverse();
    }
}

/// 一页数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub rows: Vec<T>,
    /// 当前页（从 1 开始）
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// 分页，页码超出范围时取最近的有效页
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = rows.len();
    let total_pages = total.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let rows = if start < total {
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        rows,
        page,
        page_size,
        total,
        total_pages,
    }
}

/// 表格查询条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableQuery {
    pub search: String,
    pub categories: Vec<Category>,
    pub statuses: Vec<Status>,
    pub sort: Option<SortSpec>,
    pub page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            statuses: Vec::new(),
            sort: None,
            page: 1,
        }
    }
}

pub type TableView = Page<Question>;

/// 搜索过滤 → 列筛选 → 排序 → 分页
pub fn build_view(source: &[Question], query: &TableQuery, page_size: usize) -> TableView {
    let columns = ColumnFilters {
        categories: query.categories.clone(),
        statuses: query.statuses.clone(),
    };

    let mut rows = columns.apply(filter::filter(&query.search, source));
    if let Some(spec) = query.sort {
        sort_rows(&mut rows, spec);
    }

    paginate(&rows, query.page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionId};
    use crate::services::store::mock_questions;

    fn question(id: u64, title: &str, difficulty: u8, created_at: &str) -> Question {
        Question {
            id: QuestionId(id),
            title: title.to_string(),
            description: "d".to_string(),
            category: Category::TeachingMethod,
            difficulty: Difficulty::new(difficulty).unwrap(),
            status: Status::Open,
            solution: None,
            created_at: created_at.to_string(),
            author: "a".to_string(),
        }
    }

    fn by(key: SortKey, order: SortOrder) -> SortSpec {
        SortSpec { key, order }
    }

    fn ids(rows: &[Question]) -> Vec<u64> {
        rows.iter().map(|q| q.id.0).collect()
    }

    #[test]
    fn test_sort_by_difficulty_inverse() {
        let source = vec![
            question(1, "a", 3, "2023-01-01 00:00"),
            question(2, "b", 1, "2023-01-01 00:00"),
            question(3, "c", 3, "2023-01-01 00:00"),
            question(4, "d", 5, "2023-01-01 00:00"),
        ];

        let mut asc = source.clone();
        sort_rows(&mut asc, by(SortKey::Difficulty, SortOrder::Ascending));
        let mut desc = source.clone();
        sort_rows(&mut desc, by(SortKey::Difficulty, SortOrder::Descending));

        assert_eq!(ids(&asc), vec![2, 1, 3, 4]);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_by_title() {
        let mut rows = vec![
            question(1, "b", 1, ""),
            question(2, "a", 1, ""),
            question(3, "c", 1, ""),
        ];
        sort_rows(&mut rows, by(SortKey::Title, SortOrder::Ascending));
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_created_at_parses_dates() {
        let mut rows = vec![
            question(1, "a", 1, "2023-10-01 14:30"),
            question(2, "b", 1, "2023/9/28 09:15:00"),
            question(3, "c", 1, "not a date"),
            question(4, "d", 1, "2023-09-30 08:00:00"),
        ];
        sort_rows(&mut rows, by(SortKey::CreatedAt, SortOrder::Ascending));
        assert_eq!(ids(&rows), vec![3, 2, 4, 1]);

        sort_rows(&mut rows, by(SortKey::CreatedAt, SortOrder::Descending));
        assert_eq!(ids(&rows), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_toggle_order() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_paginate() {
        let rows: Vec<u32> = (1..=23).collect();

        let first = paginate(&rows, 1, 10);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.total, 23);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&rows, 3, 10);
        assert_eq!(last.rows, vec![21, 22, 23]);

        let clamped = paginate(&rows, 9, 10);
        assert_eq!(clamped.page, 3);
        assert_eq!(paginate(&rows, 0, 10).page, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate::<u32>(&[], 2, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_build_view_combines_search_and_columns() {
        let source = mock_questions();
        let query = TableQuery {
            search: "AI".to_string(),
            statuses: vec![Status::Open],
            sort: Some(by(SortKey::Difficulty, SortOrder::Descending)),
            ..Default::default()
        };

        let view = build_view(&source, &query, 10);
        assert_eq!(view.total, 2);
        assert_eq!(ids(&view.rows), vec![3, 1]);
    }

    #[test]
    fn test_query_from_json() {
        let query: TableQuery = serde_json::from_str(
            r#"{"search":"AI","categories":["ethics"],"sort":{"key":"createdAt","order":"descending"}}"#,
        )
        .unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.categories, vec![Category::Ethics]);
        assert_eq!(query.sort.map(|s| s.key), Some(SortKey::CreatedAt));
    }
}
