//! Two-language label tables.
//!
//! Every label resolves through an exhaustive match per language, so adding
//! a `Label` without translating it fails to compile.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            other => Err(format!("unsupported language `{other}`; expected en|zh")),
        }
    }
}

/// User-facing label keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    // Navigation
    Home,
    Inbox,
    Notes,
    Mood,
    Subs,
    Social,
    Flow,
    Knowledge,
    Settings,
    WorkMode,
    LifeMode,
    DeepWork,
    Personal,
    // Dashboard
    HelloCreator,
    FocusTime,
    Analyzing,
    GenerateInsight,
    DailySummary,
    EmotionalFlow,
    Past7Days,
    ActiveNotes,
    EnergyBank,
    RecentActivity,
    // Mood
    HowAreYou,
    Rough,
    Bad,
    Okay,
    Good,
    Amazing,
    RecentHistory,
    HiddenMood,
    WhoWith,
    // Inbox
    ClearMind,
    EmptyInboxTitle,
    EmptyInboxDesc,
    // Subscriptions
    SubsTitle,
    MonthlyCost,
    NextBilling,
    ActiveSubs,
    Private,
    // Social
    SocialTitle,
    Maintenance,
    EnergyImpact,
    Overdue,
    Healthy,
    DaysAgo,
    Recharging,
    Draining,
    Neutral,
    NoData,
    // Flow
    FlowTitle,
    InboxStatus,
    ReadingStatus,
    ArchivedStatus,
    // Knowledge
    DailyReview,
    MasteryProgress,
}

/// Resolves `label` for `language`.
pub fn t(language: Language, label: Label) -> &'static str {
    match language {
        Language::En => english(label),
        Language::Zh => chinese(label),
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::Home => "Home",
        Label::Inbox => "Inbox",
        Label::Notes => "Notes",
        Label::Mood => "Mood",
        Label::Subs => "Subs",
        Label::Social => "Social",
        Label::Flow => "Flow",
        Label::Knowledge => "Knowledge",
        Label::Settings => "Settings",
        Label::WorkMode => "Work Mode",
        Label::LifeMode => "Life Mode",
        Label::DeepWork => "Deep Work",
        Label::Personal => "Personal",
        Label::HelloCreator => "Hello, Creator.",
        Label::FocusTime => "Focus Time.",
        Label::Analyzing => "ANALYZING...",
        Label::GenerateInsight => "GENERATE INSIGHT",
        Label::DailySummary => "Daily AI Summary",
        Label::EmotionalFlow => "Emotional Flow",
        Label::Past7Days => "Past 7 Days",
        Label::ActiveNotes => "Active Notes",
        Label::EnergyBank => "Energy Bank",
        Label::RecentActivity => "Recent Activity",
        Label::HowAreYou => "How are you feeling?",
        Label::Rough => "Rough",
        Label::Bad => "Bad",
        Label::Okay => "Okay",
        Label::Good => "Good",
        Label::Amazing => "Amazing",
        Label::RecentHistory => "Recent History",
        Label::HiddenMood => "Mood tracking is hidden in Work Mode.",
        Label::WhoWith => "Who are you with?",
        Label::ClearMind => "Clear your mind.",
        Label::EmptyInboxTitle => "Your mind is clear.",
        Label::EmptyInboxDesc => "Type below to capture ideas.",
        Label::SubsTitle => "Subscription Sentinel",
        Label::MonthlyCost => "Monthly Cost",
        Label::NextBilling => "Upcoming Billing",
        Label::ActiveSubs => "Active Subs",
        Label::Private => "PRIVATE",
        Label::SocialTitle => "Social Energy CRM",
        Label::Maintenance => "Maintenance Status",
        Label::EnergyImpact => "Energy Impact",
        Label::Overdue => "Overdue",
        Label::Healthy => "Healthy",
        Label::DaysAgo => "days ago",
        Label::Recharging => "Recharging",
        Label::Draining => "Draining",
        Label::Neutral => "Neutral",
        Label::NoData => "No data",
        Label::FlowTitle => "Flow Center",
        Label::InboxStatus => "Unread",
        Label::ReadingStatus => "Reading",
        Label::ArchivedStatus => "Archived",
        Label::DailyReview => "Daily Review",
        Label::MasteryProgress => "Mastery Progress",
    }
}

fn chinese(label: Label) -> &'static str {
    match label {
        Label::Home => "首页",
        Label::Inbox => "收集箱",
        Label::Notes => "笔记",
        Label::Mood => "心情",
        Label::Subs => "订阅",
        Label::Social => "人脉",
        Label::Flow => "流转",
        Label::Knowledge => "知识库",
        Label::Settings => "设置",
        Label::WorkMode => "办公模式",
        Label::LifeMode => "生活模式",
        Label::DeepWork => "深度工作",
        Label::Personal => "个人生活",
        Label::HelloCreator => "你好，创作者。",
        Label::FocusTime => "专注时刻。",
        Label::Analyzing => "分析中...",
        Label::GenerateInsight => "生成日报",
        Label::DailySummary => "AI 每日总结",
        Label::EmotionalFlow => "情绪心流",
        Label::Past7Days => "过去 7 天",
        Label::ActiveNotes => "活跃笔记",
        Label::EnergyBank => "能量银行",
        Label::RecentActivity => "最近活动",
        Label::HowAreYou => "今天感觉如何？",
        Label::Rough => "糟糕",
        Label::Bad => "不好",
        Label::Okay => "一般",
        Label::Good => "不错",
        Label::Amazing => "超棒",
        Label::RecentHistory => "最近记录",
        Label::HiddenMood => "办公模式下心情模块已隐藏。",
        Label::WhoWith => "你和谁在一起？",
        Label::ClearMind => "清空大脑，保持专注。",
        Label::EmptyInboxTitle => "当前没有待办。",
        Label::EmptyInboxDesc => "在下方输入以快速捕捉灵感。",
        Label::SubsTitle => "订阅哨兵",
        Label::MonthlyCost => "月度支出",
        Label::NextBilling => "即将扣费",
        Label::ActiveSubs => "活跃订阅",
        Label::Private => "私密",
        Label::SocialTitle => "社交能量 CRM",
        Label::Maintenance => "维护状态",
        Label::EnergyImpact => "能量影响",
        Label::Overdue => "待联系",
        Label::Healthy => "健康",
        Label::DaysAgo => "天前",
        Label::Recharging => "充电",
        Label::Draining => "耗能",
        Label::Neutral => "中性",
        Label::NoData => "暂无数据",
        Label::FlowTitle => "稍后读流转",
        Label::InboxStatus => "未读",
        Label::ReadingStatus => "在读",
        Label::ArchivedStatus => "已归档",
        Label::DailyReview => "每日复习",
        Label::MasteryProgress => "掌握进度",
    }
}

#[cfg(test)]
mod tests {
    use super::{t, Label, Language};

    #[test]
    fn labels_resolve_per_language() {
        assert_eq!(t(Language::En, Label::WorkMode), "Work Mode");
        assert_eq!(t(Language::Zh, Label::WorkMode), "办公模式");
    }

    #[test]
    fn language_parses_and_toggles() {
        assert_eq!(" ZH ".parse::<Language>(), Ok(Language::Zh));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::En.toggled(), Language::Zh);
        assert_eq!(Language::Zh.toggled(), Language::En);
    }
}
