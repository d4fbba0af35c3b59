//! 搜索过滤
//! 标题、描述、类别的子串匹配（区分大小写），不搜索解决方案

use crate::models::{Category, Question, Status};

/// 判断问题是否匹配搜索词
pub fn matches_query(question: &Question, query: &str) -> bool {
    question.title.contains(query)
        || question.description.contains(query)
        || question.category.as_str().contains(query)
        || question.category.label().contains(query)
}

/// 按搜索词过滤，空白搜索词原样返回全部问题
pub fn filter(query: &str, source: &[Question]) -> Vec<Question> {
    if query.trim().is_empty() {
        return source.to_vec();
    }

    source
        .iter()
        .filter(|q| matches_query(q, query))
        .cloned()
        .collect()
}

/// 表格列筛选（类别、状态多选，未选择表示不筛选）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilters {
    pub categories: Vec<Category>,
    pub statuses: Vec<Status>,
}

impl ColumnFilters {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.statuses.is_empty()
    }

    pub fn accepts(&self, question: &Question) -> bool {
        (self.categories.is_empty() || self.categories.contains(&question.category))
            && (self.statuses.is_empty() || self.statuses.contains(&question.status))
    }

    pub fn apply(&self, rows: Vec<Question>) -> Vec<Question> {
        if self.is_empty() {
            return rows;
        }
        rows.into_iter().filter(|q| self.accepts(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::mock_questions;

    #[test]
    fn test_empty_query_returns_source() {
        let source = mock_questions();
        assert_eq!(filter("", &source), source);
        assert_eq!(filter("   ", &source), source);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter("不存在的内容", &mock_questions()).is_empty());
    }

    #[test]
    fn test_matches_title_description_category() {
        let source = mock_questions();

        let by_title = filter("课堂教学", &source);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id.0, 1);

        let by_description = filter("采购", &source);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id.0, 2);

        assert_eq!(filter("伦理", &source).len(), 1);
        assert_eq!(filter("ethics", &source).len(), 1);
    }

    #[test]
    fn test_preserves_source_order() {
        let source = mock_questions();
        let ids: Vec<u64> = filter("AI", &source).iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(filter("ai", &mock_questions()).is_empty());
    }

    #[test]
    fn test_solution_text_not_searched() {
        assert!(filter("兼容性", &mock_questions()).is_empty());
    }

    #[test]
    fn test_column_filters() {
        let source = mock_questions();

        let open = ColumnFilters {
            statuses: vec![Status::Open],
            ..Default::default()
        };
        assert_eq!(open.apply(source.clone()).len(), 2);

        let narrowed = ColumnFilters {
            categories: vec![Category::Ethics, Category::ToolSelection],
            statuses: vec![Status::Open],
        };
        let rows = narrowed.apply(source.clone());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, Category::Ethics);

        assert_eq!(ColumnFilters::default().apply(source.clone()), source);
    }
}
