/*!
# `GOTO <number expression>`

## Purpose
Continue the program at another line.

## Remarks
If the line doesn't exist a `Line not found!` error occurs. In direct
mode `GOTO` only checks that the line exists.

## Example
```text
10 GOTO 30
20 PUT "never"
30 PRINT "here"
```

*/
