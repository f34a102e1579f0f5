/// Template literals for the four catalog approaches.
use crate::model::FolderTemplate;

pub(super) fn by_type() -> FolderTemplate {
    FolderTemplate::new()
        .nested(
            "Documents",
            FolderTemplate::leaves([
                "PDFs",
                "Word_Documents",
                "Spreadsheets",
                "Presentations",
                "Text_Files",
                "Archives",
            ]),
        )
        .nested(
            "Media",
            FolderTemplate::new()
                .nested(
                    "Images",
                    FolderTemplate::leaves(["Photos", "Screenshots", "Graphics", "Icons"]),
                )
                .nested(
                    "Videos",
                    FolderTemplate::leaves(["Personal", "Work", "Educational"]),
                )
                .nested(
                    "Audio",
                    FolderTemplate::leaves(["Music", "Recordings", "Podcasts"]),
                ),
        )
        .nested(
            "Code_and_Development",
            FolderTemplate::leaves(["Projects", "Scripts", "Documentation", "Resources"]),
        )
        .nested(
            "Data_Files",
            FolderTemplate::leaves(["Databases", "CSV_Files", "JSON_Files", "XML_Files", "Logs"]),
        )
        .nested(
            "Miscellaneous",
            FolderTemplate::leaves(["Temporary", "Unsorted", "To_Review"]),
        )
}

pub(super) fn by_project() -> FolderTemplate {
    let project = || FolderTemplate::leaves(["Documents", "Media", "Data", "Resources"]);

    FolderTemplate::new()
        .nested(
            "Active_Projects",
            FolderTemplate::new()
                .nested("Project_A", project())
                .nested("Project_B", project()),
        )
        .nested(
            "Completed_Projects",
            FolderTemplate::leaves(["Archive_2024", "Archive_2023"]),
        )
        .nested(
            "Templates_and_Resources",
            FolderTemplate::leaves(["Document_Templates", "Media_Assets", "Reference_Materials"]),
        )
        .nested("Inbox", FolderTemplate::leaves(["New_Items", "To_Categorize"]))
}

pub(super) fn by_date() -> FolderTemplate {
    FolderTemplate::new()
        .nested(
            "2024",
            FolderTemplate::new()
                .nested(
                    "Q1_Jan_Mar",
                    FolderTemplate::leaves(["January", "February", "March"]),
                )
                .nested("Q2_Apr_Jun", FolderTemplate::leaves(["April", "May", "June"]))
                .nested(
                    "Q3_Jul_Sep",
                    FolderTemplate::leaves(["July", "August", "September"]),
                )
                .nested(
                    "Q4_Oct_Dec",
                    FolderTemplate::leaves(["October", "November", "December"]),
                ),
        )
        .nested("2023", FolderTemplate::leaves(["Archive"]))
}

pub(super) fn hybrid() -> FolderTemplate {
    FolderTemplate::new()
        .nested(
            "01_Inbox",
            FolderTemplate::leaves(["New_Items", "Processing", "Quick_Access"]),
        )
        .nested(
            "02_Active_Work",
            FolderTemplate::new()
                .nested(
                    "Current_Projects",
                    FolderTemplate::new().nested(
                        "Project_Alpha",
                        FolderTemplate::leaves(["Documents", "Media", "Data"]),
                    ),
                )
                .leaf("Daily_Tasks")
                .leaf("Meetings_and_Notes"),
        )
        .nested(
            "03_Resources",
            FolderTemplate::leaves(["Templates", "Reference_Materials", "Tools_and_Utilities"]),
        )
        .nested(
            "04_Archive",
            FolderTemplate::new()
                .nested("By_Year", FolderTemplate::leaves(["2024", "2023"]))
                .leaf("Completed_Projects"),
        )
        .nested(
            "05_Personal",
            FolderTemplate::leaves(["Photos", "Documents", "Media"]),
        )
}
