/*!
# `HOME`

## Purpose
Move the cursor to the top left corner.

## Example
```text
HOME
```

*/
