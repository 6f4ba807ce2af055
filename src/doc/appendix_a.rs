/*!
# Error Messages

| Message                        | Cause                                          |
|--------------------------------|------------------------------------------------|
| `Syntax error!`                | The arguments don't fit the statement          |
| `Unknown command!`             | The first word is not a statement              |
| `Variable not found!`          | Reading or deleting a variable never assigned  |
| `Cannot change builtin!`       | Assigning or deleting `ti`, `ti$` or `rn`      |
| `Invalid number!`              | A number literal with stray characters         |
| `Invalid number expression!`   | A number expected where something else is      |
| `Malformed string argument!`   | A string literal without its closing quote     |
| `String expected!`             | A string expected where something else is      |
| `Line not found!`              | `GOTO` to a line that doesn't exist            |
| `Division by zero!`            | `/` or `%` with a right side of zero           |
| `File not found!`              | `LOAD` of a name the host doesn't have         |
| `Transfer error!`              | The link to the program host failed            |
| `Line too long!`               | A line longer than 79 characters               |

Inside a running program the message starts with the line number, as in
`30: Line not found!`.

*/
