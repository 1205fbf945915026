//! Static copy shown by the widget: the assignment brief and surrounding text.

/// Page title shown in the header.
pub const APP_TITLE: &str = "Assignment Notes App";

/// Subtitle shown under the title.
pub const APP_SUBTITLE: &str = "Read the assignment instructions and take notes";

/// Fixed name of the downloaded notes file.
pub const EXPORT_FILE_NAME: &str = "assignment_notes.txt";

/// Fixed subject of the email compose request.
pub const MAIL_SUBJECT: &str = "Assignment 3 Notes";

/// Acknowledgment shown after a save.
pub const SAVE_ACKNOWLEDGMENT: &str = "Notes saved successfully!";

/// Question asked before the draft is cleared.
pub const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear all notes?";

/// Hint rendered inside the notes area while the draft is empty.
pub const NOTES_PLACEHOLDER: &str = "Start taking notes about the assignment here...

You can write about:
• Your chosen theme
• Team members and their roles
• Key arguments and evidence
• Visual aids ideas
• Counterarguments to address
• Presentation structure
• Important deadlines and requirements";

/// Reminders rendered in the footer.
pub const FOOTER_LINES: [&str; 2] = [
    "Use this app to understand the assignment requirements and organize your thoughts.",
    "Remember to save your notes regularly and download them as a backup.",
];

/// The read-only assignment brief.
pub const ASSIGNMENT_BRIEF: &str = "ALL 124 - Assignment 3: Team Argumentation Presentation
Due: 31 October | Weight: 30 marks | Format: In-class or Digital Narrative Presentation

Instructions:
Choose ONE theme from Assignment 2 (Unemployment, Corruption, Entrepreneurship, etc.). Form a team of 3–5 students.

Develop a structured argumentative presentation taking a clear position on a debatable issue within your chosen theme.

Requirements:
1. Use the articles from Assignment 2 as your primary evidence.
2. Cite sources using Harvard style (in-slide or in-narrative).
3. Include at least one visual (graph, chart, or diagram) to support your argument; this can be GenAI.
4. Acknowledge and refute one credible counterargument.
5. Ensure equal contribution from all team members.

Evaluation Criteria (30 marks total):
a) Clarity and strength of argument (8)
b) Use of evidence from required texts (6)
c) Visual aid effectiveness (5)
d) Acknowledgement and rebuttal of counterarguments (5)
e) Team coordination and contribution (4)
f) Strong, concise conclusion (2)

Format:
• Max 8-10 minutes presentation
• Submit slides or digital narrative link via clickUP (Turnitin-enabled)
• Presentation should be uncluttered and all text should be clearly visible.

Extra credit:
Include x2 examples of meaningful and effective translanguaging that supports both the written text and the graphic or image.";
