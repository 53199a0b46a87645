//! Bilingual text lookup. Every user-facing string is looked up through a
//! [`TextId`] in the currently selected [`Language`].

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }

    pub fn t(self, id: TextId) -> &'static str {
        let (zh, en) = id.texts();
        match self {
            Language::English => en,
            Language::Chinese => zh,
        }
    }

    pub fn loaded_message(self, n_points: usize, file_name: &str) -> String {
        match self {
            Language::English => format!("Loaded {n_points} points from {file_name}"),
            Language::Chinese => format!("已加载 {n_points} 个点来自 {file_name}"),
        }
    }
}

/// Label of the language switch, identical in both locales.
pub const LANGUAGE_SWITCH_LABEL: &str = "EN/中";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextId {
    Title,
    XAxis,
    YAxis,
    RotatedX,
    RotatedY,
    PanelTitle,
    LoadFile,
    AddPoint,
    Add,
    FileNo,
    ClearSelected,
    DisplayMode,
    PointsOnly,
    Line,
    Closed,
    Rotate,
    ClearAll,
    FileList,
    NoFiles,
    CustomPoints,
    PointMode,
    LineMode,
    ClosedMode,
    InputFileNo,
    InvalidIndex,
    InputCoord,
    LoadFailed,
    PanelExpand,
    PanelCollapse,
    SelectFile,
    TextFiles,
    AllFiles,
    Help,
    Shortcuts,
    ShortcutHelp,
    ShortcutLoad,
    ShortcutPanel,
    ShortcutRotate,
    ShortcutLanguage,
    ShortcutQuit,
}

impl TextId {
    /// Returns the `(Chinese, English)` pair.
    const fn texts(self) -> (&'static str, &'static str) {
        use TextId as T;
        match self {
            T::Title => ("笛卡尔坐标系（支持旋转）", "Cartesian Coordinate System (Rotatable)"),
            T::XAxis => ("X轴", "X Axis"),
            T::YAxis => ("Y轴", "Y Axis"),
            T::RotatedX => ("Y轴（向左为正）", "Y Axis (Left Positive)"),
            T::RotatedY => ("X轴（向上为正）", "X Axis (Up Positive)"),
            T::PanelTitle => ("控制面板", "Control Panel"),
            T::LoadFile => ("加载文件", "Load File"),
            T::AddPoint => ("添加点 (x,y)", "Add Point (x,y)"),
            T::Add => ("添加", "Add"),
            T::FileNo => ("文件序号", "File No."),
            T::ClearSelected => ("清除选中文件", "Clear Selected"),
            T::DisplayMode => ("显示模式", "Display Mode"),
            T::PointsOnly => ("仅点", "Points Only"),
            T::Line => ("连线", "Line"),
            T::Closed => ("闭合曲线", "Closed Curve"),
            T::Rotate => ("旋转坐标系", "Rotate Coordinates"),
            T::ClearAll => ("清除所有", "Clear All"),
            T::FileList => ("已加载文件", "Loaded Files"),
            T::NoFiles => ("无已加载文件", "No Files Loaded"),
            T::CustomPoints => ("自定义点", "Custom Points"),
            T::PointMode => ("点", "Points"),
            T::LineMode => ("线", "Line"),
            T::ClosedMode => ("闭合", "Closed"),
            T::InputFileNo => ("请输入文件序号", "Please input file number"),
            T::InvalidIndex => ("无效的文件序号", "Invalid file number"),
            T::InputCoord => (
                "请输入有效坐标，如: 3.5,-2.1",
                "Please input valid coordinates, e.g. 3.5,-2.1",
            ),
            T::LoadFailed => ("加载文件出错", "Error loading file"),
            T::PanelExpand => ("控制面板 ▲", "Control Panel ▲"),
            T::PanelCollapse => ("控制面板 ▼", "Control Panel ▼"),
            T::SelectFile => ("选择坐标文件", "Select Coordinate File"),
            T::TextFiles => ("文本文件", "Text Files"),
            T::AllFiles => ("所有文件", "All Files"),
            T::Help => ("帮助 (F1)", "Help (F1)"),
            T::Shortcuts => ("键盘快捷键", "Keyboard Shortcuts"),
            T::ShortcutHelp => ("F1 = 显示快捷键", "F1 = Show Keyboard Shortcuts"),
            T::ShortcutLoad => ("CTRL + O = 加载文件", "CTRL + O = Load Files"),
            T::ShortcutPanel => ("F2 = 展开/收起控制面板", "F2 = Toggle Control Panel"),
            T::ShortcutRotate => ("F3 = 旋转坐标系", "F3 = Rotate Coordinates"),
            T::ShortcutLanguage => ("F4 = 切换语言", "F4 = Switch Language"),
            T::ShortcutQuit => ("F10 = 退出", "F10 = Quit App"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_follows_language() {
        assert_eq!(Language::English.t(TextId::NoFiles), "No Files Loaded");
        assert_eq!(Language::Chinese.t(TextId::NoFiles), "无已加载文件");
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.toggled(), Language::Chinese);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }

    #[test]
    fn test_loaded_message() {
        assert_eq!(
            Language::English.loaded_message(3, "a.txt"),
            "Loaded 3 points from a.txt"
        );
        assert_eq!(Language::Chinese.loaded_message(3, "a.txt"), "已加载 3 个点来自 a.txt");
    }
}
