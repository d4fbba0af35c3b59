// 服务模块
// 提供问题板的核心业务逻辑

pub mod board;
pub mod filter;
pub mod forms;
pub mod markdown;
pub mod store;
pub mod table;

pub use board::{QuestionBoard, QuestionDetail, Submitted};
pub use filter::{filter, matches_query, ColumnFilters};
pub use forms::{Notification, SolutionForm, SubmissionForm};
pub use markdown::render_markdown;
pub use store::{mock_questions, QuestionStore};
pub use table::{
    build_view, paginate, sort_rows, Page, SortKey, SortOrder, SortSpec, TableQuery, TableView,
};
