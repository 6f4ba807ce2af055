/*!
# `NEW`

## Purpose
Delete the program and all variables.

## Example
```text
NEW
```

*/
